use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::primitives::path_exists;

/// Move a single file to `dest`, which must not exist yet.
///
/// Tries a rename first; when the rename fails because source and destination
/// live on different devices the file is copied and the source removed.
pub fn move_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if path_exists(dest) {
        return Err(Error::Move {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        });
    }

    match std::fs::rename(src, dest) {
        Ok(()) => return Ok(()),
        Err(e) if e.kind() != io::ErrorKind::CrossesDevices => {
            return Err(Error::Move {
                from: src.to_path_buf(),
                to: dest.to_path_buf(),
                source: e,
            });
        }
        Err(_) => {}
    }

    std::fs::copy(src, dest).map_err(|e| Error::Copy {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source: e,
    })?;
    std::fs::remove_file(src).map_err(|e| Error::Remove {
        path: src.to_path_buf(),
        source: e,
    })
}
