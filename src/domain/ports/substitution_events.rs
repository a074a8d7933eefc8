//! Substitution Event Port
//!
//! Provides an observable interface for the substitution operations.
//! Every attempted, succeeded and failed file or entry is reported here;
//! the operations themselves never fail on a per-file problem.

use std::path::PathBuf;

/// Event emitted during substitution operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionEvent {
    /// Content replacement started for one rule
    ContentStarted {
        root: PathBuf,
        old: String,
        new: String,
    },

    /// File content replaced and verified
    ContentReplaced { path: PathBuf },

    /// Verification failed; original content was written back
    ContentFailed { path: PathBuf, reason: String },

    /// Reading or writing the file failed
    ContentError { path: PathBuf, error: String },

    /// Content replacement finished
    ContentCompleted {
        examined: usize,
        modified: usize,
        failed: usize,
    },

    /// Name replacement started for one rule
    RenameStarted {
        root: PathBuf,
        old: String,
        new: String,
    },

    /// File or directory renamed and verified
    Renamed { from: PathBuf, to: PathBuf },

    /// Rename failed or could not be verified
    RenameFailed { path: PathBuf, error: String },

    /// Name replacement finished
    RenameCompleted { renamed: usize, failed: usize },

    /// Package relocation started for one structural rule
    PackageMoveStarted {
        root: PathBuf,
        old: String,
        new: String,
    },

    /// Direct child of the old package directory moved
    EntryMoved { from: PathBuf, to: PathBuf },

    /// Destination already held an entry with the same name (last write wins)
    MoveCollision { path: PathBuf },

    /// Moving an entry failed
    MoveFailed { path: PathBuf, error: String },

    /// Empty old package directory removed
    DirectoryPruned { path: PathBuf },

    /// Package relocation finished
    PackageMoveCompleted {
        source_roots: usize,
        moved: usize,
        collisions: usize,
    },
}

/// Trait for receiving substitution events
///
/// Implementations can be:
/// - ConsoleEventSink: per-file lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait SubstitutionEventSink: Send + Sync {
    /// Handle a substitution event
    fn on_event(&self, event: SubstitutionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SubstitutionEventSink for NoopEventSink {
    fn on_event(&self, _event: SubstitutionEvent) {
        // Do nothing
    }
}

/// Event sink that records every event, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    pub events: std::sync::Mutex<Vec<SubstitutionEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SubstitutionEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl SubstitutionEventSink for RecordingEventSink {
    fn on_event(&self, event: SubstitutionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
