//! Zip extraction with path sanitization.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `extract.rs` - Entry-by-entry extraction into a destination directory
//! - `entry.rs` - Extraction report types

pub use entry::{ArchiveReport, Entry, EntryKind};
pub use error::{Error, Result};
pub use extract::{extract_from_reader, extract_zip};
pub use sanitize::{SanitizedPath, sanitize_path};

pub mod entry;
mod error;
mod extract;
mod sanitize;
