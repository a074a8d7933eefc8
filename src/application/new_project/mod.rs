//! New Project Use Case
//!
//! Orchestrates creating a project from a template:
//! - Derive names and rules from the project name
//! - Refuse an existing target directory
//! - Fetch the template into the target
//! - Apply the substitution rules
//! - Start fresh version-control history

mod options;
mod result;
mod use_case;

pub use options::{
    NewProjectOptions, DEFAULT_PACKAGE_PREFIX, DEFAULT_PACKAGE_TOKEN, DEFAULT_PROJECT_TOKEN,
    DEFAULT_TEMPLATE_REPOSITORY,
};
pub use result::NewProjectReport;
pub use use_case::NewProjectUseCase;
