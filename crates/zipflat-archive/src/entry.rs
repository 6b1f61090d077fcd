use std::path::PathBuf;

/// An archive entry written during extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub size: u64,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Stored as a regular file holding the link target.
    Symlink { target: PathBuf },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<Entry>,
}

impl ArchiveReport {
    /// Entries that produced a file on disk (regular files and symlinks).
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_directory()).count()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.total_bytes += entry.size;
        self.entry_count += 1;
        self.entries.push(entry);
    }
}
