use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{Error, Result};

/// Uniquely named working directory that is deleted with everything inside
/// it when closed or dropped.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn create_in(parent: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let parent = parent.as_ref();
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir_in(parent)
            .map_err(|e| Error::ScratchCreate {
                parent: parent.to_path_buf(),
                source: e,
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory, reporting failures that `Drop` would swallow.
    pub fn close(self) -> Result<PathBuf> {
        let path = self.dir.path().to_path_buf();
        self.dir.close().map_err(|e| Error::Remove {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}
