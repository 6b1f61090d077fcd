use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zipflat_archive::{EntryKind, extract_zip};

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("Failed to create zip");
    let mut writer = zip::ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn extract_zip_from_disk() {
    let temp_dir = tempfile::Builder::new()
        .prefix("zipflat-test-zip-")
        .tempdir()
        .expect("Failed to create temp dir");
    let archive = temp_dir.path().join("bundle.zip");
    write_zip(&archive, &[("a.txt", b"alpha"), ("nested/b.txt", b"beta")]);

    let dest = temp_dir.path().join("out");
    std::fs::create_dir(&dest).unwrap();
    let report = extract_zip(&archive, &dest).expect("Extraction of bundle.zip failed");

    assert_eq!(report.entry_count, 2);
    assert!(report.entries.iter().all(|e| e.kind == EntryKind::File));
    assert_eq!(std::fs::read(dest.join("a.txt")).unwrap(), b"alpha");
    assert_eq!(std::fs::read(dest.join("nested/b.txt")).unwrap(), b"beta");
    assert!(archive.exists(), "extraction must not consume the archive");
}

#[test]
fn extract_text_file_is_invalid() {
    let temp_dir = tempfile::tempdir().unwrap();
    let archive = temp_dir.path().join("corrupt.zip");
    std::fs::write(&archive, "this is plain text").unwrap();

    let err = extract_zip(&archive, temp_dir.path()).unwrap_err();

    assert!(err.is_invalid_archive(), "unexpected error: {err}");
    assert_eq!(std::fs::read_to_string(&archive).unwrap(), "this is plain text");
}
