//! Filesystem primitives used to flatten a directory tree.
//!
//! - `primitives/relocate.rs` - rename with a copy fallback across devices
//! - `primitives/unique.rs` - `base_N.ext` collision probing
//! - `scratch.rs` - self-removing extraction directories

mod error;
mod primitives;
mod scratch;

pub use error::{Error, Result};
pub use primitives::{Destination, move_file, path_exists, suffixed_name, unique_destination};
pub use scratch::ScratchDir;
