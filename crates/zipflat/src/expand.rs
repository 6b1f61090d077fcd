use std::collections::VecDeque;
use std::path::PathBuf;

use zipflat_fs::ScratchDir;

use crate::error::{Error, Result};
use crate::report::{Event, Phase};
use crate::session::Session;
use crate::walk::{files_below, find_archives};

/// An archive waiting to be expanded. Archives found in the tree are level 0;
/// archives pulled out of a level-n archive are level n+1.
#[derive(Debug)]
struct Pending {
    path: PathBuf,
    depth: usize,
}

/// Expand every archive in the tree, including archives that come out of
/// other archives.
///
/// Each archive is visited once: one walk seeds the queue and extraction
/// pushes whatever archives it lands at the root. Failed archives are never
/// re-queued, so the loop ends.
pub(crate) fn expand_archives(session: &mut Session<'_>) {
    session.emit(Event::PhaseStarted(Phase::ExpandArchives));

    let mut queue: VecDeque<Pending> = find_archives(session)
        .paths
        .into_iter()
        .map(|path| Pending { path, depth: 0 })
        .collect();

    while let Some(pending) = queue.pop_front() {
        expand_one(session, pending, &mut queue);
    }
}

fn expand_one(session: &mut Session<'_>, pending: Pending, queue: &mut VecDeque<Pending>) {
    if pending.depth > session.options.get_max_depth() {
        session.summary.archives_skipped += 1;
        session.emit(Event::DepthExceeded {
            archive: pending.path,
            depth: pending.depth,
        });
        return;
    }

    session.emit(Event::Unzipping {
        archive: pending.path.clone(),
        depth: pending.depth,
    });

    match expand(session, &pending, queue) {
        Ok(()) => session.summary.archives_expanded += 1,
        Err(e) if e.is_invalid_archive() => {
            session.summary.archives_skipped += 1;
            session.emit(Event::InvalidArchive {
                archive: pending.path,
                reason: e.to_string(),
            });
        }
        Err(e) => {
            session.summary.archives_failed += 1;
            session.emit(Event::ArchiveFailed {
                archive: pending.path,
                reason: e.to_string(),
            });
        }
    }
}

/// Extract into a scratch directory, lift every file to the root, then drop
/// the scratch directory and the archive. The archive is kept unless every
/// step succeeded; the scratch directory is removed either way.
fn expand(
    session: &mut Session<'_>,
    pending: &Pending,
    queue: &mut VecDeque<Pending>,
) -> Result<()> {
    let scratch = ScratchDir::create_in(session.root, session.options.get_scratch_prefix())?;
    session.emit(Event::ScratchCreated {
        path: scratch.path().to_path_buf(),
    });

    let report = zipflat_archive::extract_zip(&pending.path, scratch.path())?;
    session.emit(Event::Extracted {
        scratch: scratch.path().to_path_buf(),
        entries: report.entry_count,
    });

    let listing = files_below(session, scratch.path(), 1);
    let mut failed = listing.failures;
    for file in listing.paths {
        match session.relocate(&file) {
            Some(dest) => {
                if dest
                    .file_name()
                    .is_some_and(|name| session.options.is_archive(name))
                {
                    queue.push_back(Pending {
                        path: dest,
                        depth: pending.depth + 1,
                    });
                }
            }
            None => failed += 1,
        }
    }

    let removed = scratch.close()?;
    session.emit(Event::ScratchRemoved { path: removed });

    if failed > 0 {
        return Err(Error::IncompleteRelocation { failed });
    }

    std::fs::remove_file(&pending.path).map_err(|e| zipflat_fs::Error::Remove {
        path: pending.path.clone(),
        source: e,
    })?;
    session.emit(Event::ArchiveRemoved {
        archive: pending.path.clone(),
    });

    Ok(())
}
