use std::fs::File;
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use crate::entry::{ArchiveReport, Entry, EntryKind};
use crate::error::{Error, Result};
use crate::sanitize::sanitize_path;

const S_IFMT: u32 = 0o170000;
const S_IFLNK: u32 = 0o120000;

/// Extract the zip at `archive_path` into `destination`, keeping the
/// archive's internal directory layout.
pub fn extract_zip(
    archive_path: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<ArchiveReport> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path).map_err(|e| Error::Open {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    extract_from_reader(io::BufReader::new(file), destination.as_ref())
}

pub fn extract_from_reader<R: Read + Seek>(reader: R, destination: &Path) -> Result<ArchiveReport> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|e| Error::InvalidArchive {
        reason: e.to_string(),
    })?;

    let mut report = ArchiveReport::default();

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(|e| Error::CorruptEntry {
            index,
            reason: e.to_string(),
        })?;

        let sanitized = sanitize_path(file.name(), destination)?;
        let size = file.size();
        let is_symlink = file.unix_mode().is_some_and(|m| m & S_IFMT == S_IFLNK);

        if file.is_dir() {
            if !sanitized.relative.as_os_str().is_empty() {
                create_dir_all(&sanitized.resolved)?;
            }
            report.push(Entry {
                original_path: sanitized.original,
                target_path: sanitized.resolved,
                size,
                kind: EntryKind::Directory,
            });
            continue;
        }

        if sanitized.relative.as_os_str().is_empty() {
            return Err(Error::InvalidPath);
        }
        if let Some(parent) = sanitized.resolved.parent() {
            create_dir_all(parent)?;
        }

        let kind = if is_symlink {
            let mut target = Vec::new();
            file.read_to_end(&mut target).map_err(|e| Error::CorruptEntry {
                index,
                reason: e.to_string(),
            })?;
            write_file(&sanitized.resolved, &mut target.as_slice(), index)?;
            EntryKind::Symlink {
                target: PathBuf::from(String::from_utf8_lossy(&target).into_owned()),
            }
        } else {
            write_file(&sanitized.resolved, &mut file, index)?;
            EntryKind::File
        };

        report.push(Entry {
            original_path: sanitized.original,
            target_path: sanitized.resolved,
            size,
            kind,
        });
    }

    Ok(report)
}

fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Stream `reader` into a new file at `target`. Read failures mean the entry
/// data is bad; write failures are reported against the target.
fn write_file<R: Read>(target: &Path, reader: &mut R, index: usize) -> Result<()> {
    let extraction_failed = |e: io::Error| Error::ExtractionFailed {
        path: target.to_path_buf(),
        source: e,
    };

    let mut out = File::create(target).map_err(extraction_failed)?;
    let mut buffer = [0u8; 8192];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Error::CorruptEntry {
                    index,
                    reason: e.to_string(),
                });
            }
        };
        out.write_all(&buffer[..n]).map_err(extraction_failed)?;
    }

    out.flush().map_err(extraction_failed)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use zip::write::SimpleFileOptions;

    fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(name.to_string(), options).unwrap();
            } else {
                writer.start_file(name.to_string(), options).unwrap();
                writer.write_all(content).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn extract_preserves_structure() {
        let data = build_zip(&[
            ("top.txt", b"top"),
            ("docs/", b""),
            ("docs/deep/inner.txt", b"inner"),
        ]);
        let temp_dir = tempfile::tempdir().unwrap();

        let report = extract_from_reader(Cursor::new(data), temp_dir.path()).unwrap();

        assert_eq!(report.entry_count, 3);
        assert_eq!(report.file_count(), 2);
        assert_eq!(report.total_bytes, 8);
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("top.txt")).unwrap(),
            "top"
        );
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("docs/deep/inner.txt")).unwrap(),
            "inner"
        );
        assert!(temp_dir.path().join("docs").is_dir());
    }

    #[test]
    fn empty_archive_extracts_nothing() {
        let data = build_zip(&[]);
        let temp_dir = tempfile::tempdir().unwrap();

        let report = extract_from_reader(Cursor::new(data), temp_dir.path()).unwrap();

        assert_eq!(report, ArchiveReport::default());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn garbage_is_invalid_archive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data = b"definitely not a zip".to_vec();
        let result = extract_from_reader(Cursor::new(data), temp_dir.path());

        let err = result.unwrap_err();
        assert!(matches!(err, Error::InvalidArchive { .. }));
        assert!(err.is_invalid_archive());
    }

    #[test]
    fn empty_input_is_invalid_archive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_from_reader(Cursor::new(Vec::new()), temp_dir.path());
        assert!(result.unwrap_err().is_invalid_archive());
    }

    #[test]
    fn missing_file_is_open_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = extract_zip(temp_dir.path().join("absent.zip"), temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(!err.is_invalid_archive());
    }

    #[test]
    fn symlink_entry_becomes_regular_file() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("target.txt", options).unwrap();
        writer.write_all(b"payload").unwrap();
        writer.add_symlink("link.txt", "target.txt", options).unwrap();
        let data = writer.finish().unwrap().into_inner();
        let temp_dir = tempfile::tempdir().unwrap();

        let report = extract_from_reader(Cursor::new(data), temp_dir.path()).unwrap();

        let link = temp_dir.path().join("link.txt");
        let metadata = std::fs::symlink_metadata(&link).unwrap();
        assert!(metadata.file_type().is_file());
        assert!(!metadata.file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&link).unwrap(), "target.txt");
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("target.txt")).unwrap(),
            "payload"
        );
        assert_eq!(report.file_count(), 2);
        assert_eq!(
            report.entries[1].kind,
            EntryKind::Symlink {
                target: PathBuf::from("target.txt")
            }
        );
    }
}
