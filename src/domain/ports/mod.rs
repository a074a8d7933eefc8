//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod substitution_events;
pub mod version_control;

pub use file_system::{FileSystem, FsError, FsResult, TextRead, Walk, WalkEntry};
pub use substitution_events::{NoopEventSink, SubstitutionEvent, SubstitutionEventSink};
pub use version_control::VersionControl;

#[cfg(test)]
pub use substitution_events::RecordingEventSink;
