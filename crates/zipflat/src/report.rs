//! Diagnostics emitted while a tree is processed.
//!
//! The core never logs directly: every action and anomaly becomes an
//! [`Event`] handed to a caller-supplied [`Reporter`]. [`TracingReporter`]
//! forwards events to `tracing`; `Vec<Event>` records them.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::summary::Summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    ExpandArchives,
    FlattenFiles,
    PruneDirectories,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExpandArchives => "Expanding archives...",
            Self::FlattenFiles => "Moving remaining files to root folder...",
            Self::PruneDirectories => "Cleaning up empty directories...",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Started { root: PathBuf },
    InvalidRoot { root: PathBuf },
    PhaseStarted(Phase),
    Unzipping { archive: PathBuf, depth: usize },
    ScratchCreated { path: PathBuf },
    Extracted { scratch: PathBuf, entries: usize },
    Renamed { original: OsString, renamed: OsString },
    Moved { from: PathBuf, to: PathBuf },
    MoveFailed { from: PathBuf, reason: String },
    ScratchRemoved { path: PathBuf },
    ArchiveRemoved { archive: PathBuf },
    InvalidArchive { archive: PathBuf, reason: String },
    DepthExceeded { archive: PathBuf, depth: usize },
    ArchiveFailed { archive: PathBuf, reason: String },
    WalkFailed { path: Option<PathBuf>, reason: String },
    DirectoryRemoved { path: PathBuf },
    DirectoryNotEmpty { path: PathBuf },
    DirectoryRemoveFailed { path: PathBuf, reason: String },
    Finished { root: PathBuf, summary: Summary },
}

impl Event {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Renamed { .. }
            | Self::InvalidArchive { .. }
            | Self::DepthExceeded { .. }
            | Self::DirectoryNotEmpty { .. } => Severity::Warning,
            Self::InvalidRoot { .. }
            | Self::MoveFailed { .. }
            | Self::ArchiveFailed { .. }
            | Self::WalkFailed { .. }
            | Self::DirectoryRemoveFailed { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Stable short name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::InvalidRoot { .. } => "invalid_root",
            Self::PhaseStarted(_) => "phase",
            Self::Unzipping { .. } => "unzipping",
            Self::ScratchCreated { .. } => "scratch_created",
            Self::Extracted { .. } => "extracted",
            Self::Renamed { .. } => "renamed",
            Self::Moved { .. } => "moved",
            Self::MoveFailed { .. } => "move_failed",
            Self::ScratchRemoved { .. } => "scratch_removed",
            Self::ArchiveRemoved { .. } => "archive_removed",
            Self::InvalidArchive { .. } => "invalid_archive",
            Self::DepthExceeded { .. } => "depth_exceeded",
            Self::ArchiveFailed { .. } => "archive_failed",
            Self::WalkFailed { .. } => "walk_failed",
            Self::DirectoryRemoved { .. } => "directory_removed",
            Self::DirectoryNotEmpty { .. } => "directory_not_empty",
            Self::DirectoryRemoveFailed { .. } => "directory_remove_failed",
            Self::Finished { .. } => "finished",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { root } => write!(f, "Processing folder: {}", root.display()),
            Self::InvalidRoot { root } => write!(
                f,
                "Source folder '{}' does not exist or is not a directory.",
                root.display()
            ),
            Self::PhaseStarted(phase) => write!(f, "{phase}"),
            Self::Unzipping { archive, depth } => {
                write!(f, "Unzipping: {}", archive.display())?;
                if *depth > 0 {
                    write!(f, " (nested level {depth})")?;
                }
                Ok(())
            }
            Self::ScratchCreated { path } => {
                write!(f, "Created temporary extraction directory: {}", path.display())
            }
            Self::Extracted { scratch, entries } => write!(
                f,
                "Extracted {entries} entries to temporary location: {}",
                scratch.display()
            ),
            Self::Renamed { original, renamed } => write!(
                f,
                "Filename conflict: '{}' exists. Renamed to '{}'",
                original.to_string_lossy(),
                renamed.to_string_lossy()
            ),
            Self::Moved { from, to } => {
                write!(f, "Moved file: {} -> {}", from.display(), to.display())
            }
            Self::MoveFailed { from, reason } => {
                write!(f, "Error moving file '{}': {reason}", from.display())
            }
            Self::ScratchRemoved { path } => {
                write!(f, "Removed temporary extraction directory: {}", path.display())
            }
            Self::ArchiveRemoved { archive } => {
                write!(f, "Removed zip file: {}", archive.display())
            }
            Self::InvalidArchive { archive, reason } => write!(
                f,
                "'{}' is not a valid zip file ({reason}). Skipping.",
                archive.display()
            ),
            Self::DepthExceeded { archive, depth } => write!(
                f,
                "'{}' is nested {depth} levels deep, beyond the configured limit. Skipping.",
                archive.display()
            ),
            Self::ArchiveFailed { archive, reason } => {
                write!(f, "Error processing zip '{}': {reason}", archive.display())
            }
            Self::WalkFailed { path: Some(path), reason } => {
                write!(f, "Error reading '{}': {reason}", path.display())
            }
            Self::WalkFailed { path: None, reason } => write!(f, "Error walking tree: {reason}"),
            Self::DirectoryRemoved { path } => {
                write!(f, "Removed empty directory: {}", path.display())
            }
            Self::DirectoryNotEmpty { path } => write!(
                f,
                "Directory '{}' is not empty. Leaving it in place.",
                path.display()
            ),
            Self::DirectoryRemoveFailed { path, reason } => {
                write!(f, "Error removing directory '{}': {reason}", path.display())
            }
            Self::Finished { root, summary } => {
                write!(f, "Finished processing folder: {} ({summary})", root.display())
            }
        }
    }
}

/// Sink for run diagnostics.
pub trait Reporter {
    fn report(&mut self, event: Event);
}

impl Reporter for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: Event) {
        (**self).report(event);
    }
}

/// Forwards events to the active `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: Event) {
        let kind = event.kind();
        match event.severity() {
            Severity::Info => tracing::info!(kind, "{event}"),
            Severity::Warning => tracing::warn!(kind, "{event}"),
            Severity::Error => tracing::error!(kind, "{event}"),
        }
    }
}
