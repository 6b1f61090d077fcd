use std::path::Path;

use crate::error::{Error, Result};
use crate::expand::expand_archives;
use crate::flatten::flatten_subdirectories;
use crate::options::FlattenOptions;
use crate::prune::prune_empty_directories;
use crate::report::{Event, Reporter};
use crate::session::Session;
use crate::summary::Summary;

/// Expand every zip under `root`, move every file to `root`, and remove the
/// subdirectories left empty.
///
/// Only an invalid root aborts the run, before anything is touched. Every
/// other failure is reported through `reporter` and counted in the returned
/// [`Summary`]. Running twice is the same as running once, unless the first
/// run left archives past [`FlattenOptions::max_depth`].
///
/// # Example
///
/// ```no_run
/// use zipflat::{FlattenOptions, TracingReporter, extract_and_flatten};
///
/// let summary = extract_and_flatten("downloads", &FlattenOptions::default(), &mut TracingReporter)?;
/// println!("{summary}");
/// # Ok::<(), zipflat::Error>(())
/// ```
pub fn extract_and_flatten(
    root: impl AsRef<Path>,
    options: &FlattenOptions,
    reporter: &mut dyn Reporter,
) -> Result<Summary> {
    let root = root.as_ref();

    if !root.is_dir() {
        reporter.report(Event::InvalidRoot {
            root: root.to_path_buf(),
        });
        return Err(Error::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let mut session = Session::new(root, options, reporter);
    session.emit(Event::Started {
        root: root.to_path_buf(),
    });

    expand_archives(&mut session);
    flatten_subdirectories(&mut session);
    prune_empty_directories(&mut session);

    let summary = session.summary;
    session.emit(Event::Finished {
        root: root.to_path_buf(),
        summary,
    });

    Ok(summary)
}
