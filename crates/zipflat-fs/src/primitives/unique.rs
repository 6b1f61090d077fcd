use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A free destination inside a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    /// Set when the requested name was taken and a suffixed one was chosen.
    pub collided: bool,
}

impl Destination {
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }
}

/// Whether anything occupies `path`, dangling symlinks included.
///
/// Errors other than "not found" count as occupied so a name we cannot
/// inspect is never handed out.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    match std::fs::symlink_metadata(path.as_ref()) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// Build `base_N.ext` from `name`.
///
/// The extension is whatever follows the last dot, so `a.tar.gz` becomes
/// `a.tar_1.gz` and `.bashrc` becomes `.bashrc_1`.
pub fn suffixed_name(name: &OsStr, n: u64) -> OsString {
    let path = Path::new(name);
    let stem = path.file_stem().unwrap_or(name);

    let mut out = OsString::with_capacity(name.len() + 4);
    out.push(stem);
    out.push(format!("_{n}"));
    if let Some(ext) = path.extension() {
        out.push(".");
        out.push(ext);
    }
    out
}

/// Pick the destination for `file_name` inside `dir`.
///
/// Returns `dir/file_name` when it is free, otherwise the first free name
/// among `base_1.ext`, `base_2.ext`, ... Probing stops with an error on a
/// candidate whose status cannot be read, such as a suffixed name that runs
/// past the filesystem's name length limit.
pub fn unique_destination(dir: impl AsRef<Path>, file_name: &OsStr) -> Result<Destination> {
    let dir = dir.as_ref();
    let mut counter = 0u64;

    loop {
        let candidate = if counter == 0 {
            dir.join(file_name)
        } else {
            dir.join(suffixed_name(file_name, counter))
        };

        match std::fs::symlink_metadata(&candidate) {
            Ok(_) => counter += 1,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Destination {
                    path: candidate,
                    collided: counter > 0,
                });
            }
            Err(e) => {
                return Err(Error::Probe {
                    path: candidate,
                    source: e,
                });
            }
        }
    }
}
