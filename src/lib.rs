//! Scaffold - create projects from templates by token substitution
//!
//! A template tree carries placeholder tokens in file contents, in file and
//! directory names, and as a dotted package path mirrored in source
//! directories. Scaffold applies an ordered list of substitution rules to
//! such a tree:
//!
//! - content replacement in allow-listed files, verified by re-reading
//! - renaming of files and directories, deepest first
//! - relocation of package directories under each source root
//!
//! The `new` command wraps this with a template fetch and a history reset.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{
    NewProjectOptions, NewProjectReport, NewProjectUseCase, SubstitutionOptions,
    SubstitutionReport, SubstitutionUseCase,
};
pub use config::Config;
pub use domain::value_objects::{Namespace, ProjectNames, RuleSet, SubstitutionRule};
pub use error::{ScaffoldError, ScaffoldResult};
