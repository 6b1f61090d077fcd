use std::ffi::OsStr;

use tempfile::tempdir;
use zipflat_fs::{ScratchDir, move_file, unique_destination};

#[test]
fn test_collision_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("sub");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(dir.path().join("report.pdf"), "first").unwrap();
    std::fs::write(nested.join("report.pdf"), "second").unwrap();

    let dest = unique_destination(dir.path(), OsStr::new("report.pdf")).unwrap();
    move_file(nested.join("report.pdf"), &dest.path).unwrap();

    assert!(dest.collided);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("report.pdf")).unwrap(),
        "first"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("report_1.pdf")).unwrap(),
        "second"
    );
}

#[test]
fn test_repeated_collisions_count_up() {
    let dir = tempdir().unwrap();
    let scratch = ScratchDir::create_in(dir.path(), "scratch-").unwrap();

    for round in 0..4 {
        let src = scratch.path().join("x.txt");
        std::fs::write(&src, round.to_string()).unwrap();
        let dest = unique_destination(dir.path(), OsStr::new("x.txt")).unwrap();
        move_file(&src, &dest.path).unwrap();
    }
    scratch.close().unwrap();

    let mut names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["x.txt", "x_1.txt", "x_2.txt", "x_3.txt"]);
    assert_eq!(std::fs::read_to_string(dir.path().join("x_3.txt")).unwrap(), "3");
}
