use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source folder '{path}' does not exist or is not a directory")]
    InvalidRoot { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] zipflat_fs::Error),

    #[error(transparent)]
    Archive(#[from] zipflat_archive::Error),

    #[error("{failed} extracted file(s) could not be moved to the root")]
    IncompleteRelocation { failed: usize },
}

impl Error {
    pub fn is_invalid_archive(&self) -> bool {
        matches!(self, Self::Archive(e) if e.is_invalid_archive())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
