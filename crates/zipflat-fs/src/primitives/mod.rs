mod relocate;
mod unique;

pub use relocate::move_file;
pub use unique::{Destination, path_exists, suffixed_name, unique_destination};
