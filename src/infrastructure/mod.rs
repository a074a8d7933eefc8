//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `events/` - Event sinks (Console, JSON)
//! - `vcs/` - Version control (git, local template copy)

pub mod events;
pub mod fs;
pub mod vcs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use vcs::{GitCli, LocalTemplate};
