//! Expand nested zip archives and flatten a directory tree into its root.
//!
//! A run has three phases over one root directory:
//!
//! 1. archives anywhere in the tree are extracted and their files lifted to
//!    the root, recursing into archives found inside archives
//! 2. files left in subdirectories are lifted to the root
//! 3. subdirectories left empty are removed, deepest first
//!
//! Name collisions at the root never overwrite: the incoming file becomes
//! `base_1.ext`, `base_2.ext`, ... whichever is free first.

mod error;
mod expand;
mod flatten;
mod options;
mod prune;
mod report;
mod run;
mod session;
mod summary;
mod walk;

pub use error::{Error, Result};
pub use options::{DEFAULT_EXTENSION, DEFAULT_MAX_DEPTH, DEFAULT_SCRATCH_PREFIX, FlattenOptions};
pub use report::{Event, Phase, Reporter, Severity, TracingReporter};
pub use run::extract_and_flatten;
pub use summary::Summary;
