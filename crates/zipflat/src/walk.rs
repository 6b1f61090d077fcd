use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::report::Event;
use crate::session::Session;

/// Paths collected by a walk, plus how many entries could not be read.
#[derive(Debug, Default)]
pub(crate) struct Listing {
    pub paths: Vec<PathBuf>,
    pub failures: usize,
}

/// Every archive anywhere below the root, in sorted walk order.
pub(crate) fn find_archives(session: &mut Session<'_>) -> Listing {
    let mut listing = Listing::default();

    for entry in WalkDir::new(session.root).min_depth(1).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && session.options.is_archive(entry.file_name()) {
                    listing.paths.push(entry.into_path());
                }
            }
            Err(e) => {
                listing.failures += 1;
                report_walk_error(session, e);
            }
        }
    }

    listing
}

/// Every non-directory entry at least `min_depth` levels below `dir`.
///
/// The listing is taken up front so callers can move files without
/// disturbing the walk.
pub(crate) fn files_below(session: &mut Session<'_>, dir: &Path, min_depth: usize) -> Listing {
    let mut listing = Listing::default();

    for entry in WalkDir::new(dir).min_depth(min_depth).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    listing.paths.push(entry.into_path());
                }
            }
            Err(e) => {
                listing.failures += 1;
                report_walk_error(session, e);
            }
        }
    }

    listing
}

pub(crate) fn report_walk_error(session: &mut Session<'_>, error: walkdir::Error) {
    session.emit(Event::WalkFailed {
        path: error.path().map(Path::to_path_buf),
        reason: error.to_string(),
    });
}
