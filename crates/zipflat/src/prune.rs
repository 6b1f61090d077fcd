use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::report::{Event, Phase};
use crate::session::Session;
use crate::walk::report_walk_error;

/// Remove empty subdirectories, deepest first. The root itself is never
/// considered.
pub(crate) fn prune_empty_directories(session: &mut Session<'_>) {
    session.emit(Event::PhaseStarted(Phase::PruneDirectories));

    let root = session.root;
    for entry in WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report_walk_error(session, e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        match is_empty_dir(path) {
            Ok(true) => match std::fs::remove_dir(path) {
                Ok(()) => {
                    session.summary.directories_removed += 1;
                    session.emit(Event::DirectoryRemoved {
                        path: path.to_path_buf(),
                    });
                }
                Err(e) => session.emit(Event::DirectoryRemoveFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }),
            },
            Ok(false) => session.emit(Event::DirectoryNotEmpty {
                path: path.to_path_buf(),
            }),
            Err(e) => session.emit(Event::DirectoryRemoveFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}
