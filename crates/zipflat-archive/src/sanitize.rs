use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of sanitizing an archive entry path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizedPath {
    pub original: PathBuf,
    /// Normalized path relative to the extraction base. Empty for entries
    /// that name the base itself, such as `./`.
    pub relative: PathBuf,
    pub resolved: PathBuf,
}

/// Sanitize a raw entry name for extraction below `base`.
///
/// Backslashes are treated as separators. Absolute names and names whose
/// `..` components climb above the base are rejected as zip-slip.
pub fn sanitize_path<B: AsRef<Path>>(entry_name: &str, base: B) -> Result<SanitizedPath> {
    let base = base.as_ref();

    if entry_name.contains('\0') {
        return Err(Error::InvalidPath);
    }

    let original = PathBuf::from(entry_name.replace('\\', "/"));
    let relative = normalize_relative(&original).ok_or_else(|| Error::ZipSlip {
        entry: original.clone(),
        resolved: lexical_join(base, &original),
    })?;
    let resolved = base.join(&relative);

    Ok(SanitizedPath {
        original,
        relative,
        resolved,
    })
}

/// Resolve `.` and `..` without touching the filesystem. `None` when the
/// path is absolute or escapes its starting point.
fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(result)
}

/// Best-effort resolution used only for error messages.
fn lexical_join(base: &Path, entry: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in base.join(entry).components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::CurDir => {}
            other => result.push(other.as_os_str()),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_base_path() -> &'static Path {
        if cfg!(windows) {
            Path::new("C:/scratch/extract")
        } else {
            Path::new("/scratch/extract")
        }
    }

    #[test]
    fn basic_path_sanitization() {
        let result = sanitize_path("docs/readme.txt", test_base_path()).unwrap();
        assert_eq!(result.original, Path::new("docs/readme.txt"));
        assert_eq!(result.relative, Path::new("docs/readme.txt"));
        assert_eq!(result.resolved, test_base_path().join("docs/readme.txt"));
    }

    #[test]
    fn inner_parent_components_are_resolved() {
        let result = sanitize_path("a/./b/../c.txt", test_base_path()).unwrap();
        assert_eq!(result.relative, Path::new("a/c.txt"));
    }

    #[test]
    fn backslash_separators() {
        let result = sanitize_path("dir\\sub\\file.txt", test_base_path()).unwrap();
        assert_eq!(result.relative, Path::new("dir/sub/file.txt"));
    }

    #[test]
    fn zip_slip_parent_traversal() {
        let result = sanitize_path("../../etc/passwd", test_base_path());
        assert!(matches!(result, Err(Error::ZipSlip { .. })));

        let result = sanitize_path("a/../../escape.txt", test_base_path());
        assert!(matches!(result, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn zip_slip_absolute_path() {
        let result = sanitize_path("/etc/passwd", test_base_path());
        assert!(matches!(result, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn null_byte_rejected() {
        let result = sanitize_path("bad\0name", test_base_path());
        assert!(matches!(result, Err(Error::InvalidPath)));
    }

    #[test]
    fn current_dir_entry_is_empty() {
        let result = sanitize_path("./", test_base_path()).unwrap();
        assert_eq!(result.relative, PathBuf::new());
        assert_eq!(result.resolved, test_base_path());
    }
}
