use crate::report::{Event, Phase};
use crate::session::Session;
use crate::walk::files_below;

/// Move every file found in a subdirectory of the root up to the root.
pub(crate) fn flatten_subdirectories(session: &mut Session<'_>) {
    session.emit(Event::PhaseStarted(Phase::FlattenFiles));

    let root = session.root;
    // depth 1 is the root's own entries
    let listing = files_below(session, root, 2);
    for file in listing.paths {
        session.relocate(&file);
    }
}
