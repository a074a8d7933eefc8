//! Domain Services
//!
//! The three substitution operations. Each performs its I/O through the
//! `FileSystem` port and reports per-entry progress through a
//! `SubstitutionEventSink`; per-entry problems are reported, never raised.

mod content_replacer;
mod name_replacer;
mod package_mover;

pub use content_replacer::{ContentReplacer, ContentReport};
pub use name_replacer::{NameReplacer, RenameReport};
pub use package_mover::{MoveReport, PackageMover};
