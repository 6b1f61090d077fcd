use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open archive '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("not a valid zip archive: {reason}")]
    InvalidArchive { reason: String },

    #[error("archive entry {index} is corrupted: {reason}")]
    CorruptEntry { index: usize, reason: String },

    #[error("zip-slip attack detected: entry '{entry}' resolves to '{resolved}'")]
    ZipSlip { entry: PathBuf, resolved: PathBuf },

    #[error("entry path contains null byte")]
    InvalidPath,

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
}

impl Error {
    /// The input is not a readable zip; nothing about the destination is wrong.
    pub fn is_invalid_archive(&self) -> bool {
        matches!(self, Self::InvalidArchive { .. } | Self::CorruptEntry { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
