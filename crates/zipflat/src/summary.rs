use std::fmt;

use serde::Serialize;

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub archives_expanded: usize,
    /// Invalid archives and archives nested deeper than the limit.
    pub archives_skipped: usize,
    pub archives_failed: usize,
    pub files_moved: usize,
    pub files_renamed: usize,
    pub directories_removed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} archive(s) expanded, {} skipped, {} failed; {} file(s) moved ({} renamed); \
             {} director(ies) removed; {} warning(s), {} error(s)",
            self.archives_expanded,
            self.archives_skipped,
            self.archives_failed,
            self.files_moved,
            self.files_renamed,
            self.directories_removed,
            self.warnings,
            self.errors,
        )
    }
}
