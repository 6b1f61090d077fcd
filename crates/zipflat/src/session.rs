use std::path::{Path, PathBuf};

use zipflat_fs::{move_file, unique_destination};

use crate::options::FlattenOptions;
use crate::report::{Event, Reporter, Severity};
use crate::summary::Summary;

/// State shared by the three phases of one run.
pub(crate) struct Session<'a> {
    pub root: &'a Path,
    pub options: &'a FlattenOptions,
    pub summary: Summary,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Session<'a> {
    pub fn new(root: &'a Path, options: &'a FlattenOptions, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            root,
            options,
            summary: Summary::default(),
            reporter,
        }
    }

    pub fn emit(&mut self, event: Event) {
        match event.severity() {
            Severity::Info => {}
            Severity::Warning => self.summary.warnings += 1,
            Severity::Error => self.summary.errors += 1,
        }
        self.reporter.report(event);
    }

    /// Move `file` directly under the root, renaming on collision.
    ///
    /// Returns the new location, or `None` after reporting the failure.
    pub fn relocate(&mut self, file: &Path) -> Option<PathBuf> {
        let Some(name) = file.file_name() else {
            self.emit(Event::MoveFailed {
                from: file.to_path_buf(),
                reason: "path has no file name".to_string(),
            });
            return None;
        };

        let dest = match unique_destination(self.root, name) {
            Ok(dest) => dest,
            Err(e) => {
                self.emit(Event::MoveFailed {
                    from: file.to_path_buf(),
                    reason: e.to_string(),
                });
                return None;
            }
        };

        match move_file(file, &dest.path) {
            Ok(()) => {
                if dest.collided {
                    self.summary.files_renamed += 1;
                    self.emit(Event::Renamed {
                        original: name.to_os_string(),
                        renamed: dest.file_name().to_os_string(),
                    });
                }
                self.summary.files_moved += 1;
                self.emit(Event::Moved {
                    from: file.to_path_buf(),
                    to: dest.path.clone(),
                });
                Some(dest.path)
            }
            Err(e) => {
                self.emit(Event::MoveFailed {
                    from: file.to_path_buf(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn collision_is_reported_after_the_move() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("x.txt"), "existing").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/x.txt"), "incoming").unwrap();
        let options = FlattenOptions::default();
        let mut events: Vec<Event> = Vec::new();

        let mut session = Session::new(dir.path(), &options, &mut events);
        let moved = session.relocate(&dir.path().join("sub/x.txt"));
        let summary = session.summary;

        assert_eq!(moved, Some(dir.path().join("x_1.txt")));
        assert_eq!(summary.files_moved, 1);
        assert_eq!(summary.files_renamed, 1);
        assert_eq!(summary.warnings, 1);
        assert!(matches!(
            events.as_slice(),
            [Event::Renamed { .. }, Event::Moved { .. }]
        ));
    }

    #[test]
    fn failed_move_reports_no_rename() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("x.txt"), "existing").unwrap();
        let options = FlattenOptions::default();
        let mut events: Vec<Event> = Vec::new();

        let mut session = Session::new(dir.path(), &options, &mut events);
        let moved = session.relocate(&dir.path().join("gone/x.txt"));
        let summary = session.summary;

        assert_eq!(moved, None);
        assert_eq!(summary.files_moved, 0);
        assert_eq!(summary.files_renamed, 0);
        assert_eq!(summary.warnings, 0);
        assert_eq!(summary.errors, 1);
        assert!(matches!(events.as_slice(), [Event::MoveFailed { .. }]));
        assert!(!dir.path().join("x_1.txt").exists());
    }
}
