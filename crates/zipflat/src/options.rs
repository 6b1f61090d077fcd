use std::ffi::OsStr;

pub const DEFAULT_EXTENSION: &str = "zip";
pub const DEFAULT_SCRATCH_PREFIX: &str = ".zipflat-";
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Clone, Debug)]
pub struct FlattenOptions {
    suffix: String,
    scratch_prefix: String,
    max_depth: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self {
            suffix: format!(".{DEFAULT_EXTENSION}"),
            scratch_prefix: DEFAULT_SCRATCH_PREFIX.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Archive extension, with or without the leading dot.
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.suffix = format!(".{}", extension.as_ref().trim_start_matches('.'));
        self
    }

    pub fn scratch_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.scratch_prefix = prefix.into();
        self
    }

    /// Deepest archive-inside-archive level that is still expanded.
    /// Archives found directly in the tree are level 0.
    ///
    /// An archive past the limit is left at the root. The next run finds it
    /// there at level 0 and expands it, so a run that hit the limit is not
    /// idempotent: each further run expands up to `depth + 1` more levels.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn get_suffix(&self) -> &str {
        &self.suffix
    }

    pub fn get_scratch_prefix(&self) -> &str {
        &self.scratch_prefix
    }

    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    /// Case-sensitive suffix match on the raw file name.
    pub fn is_archive(&self, file_name: &OsStr) -> bool {
        file_name
            .as_encoded_bytes()
            .ends_with(self.suffix.as_bytes())
    }
}
