//! New project result types

use std::path::PathBuf;

use crate::application::substitution::SubstitutionReport;
use crate::domain::value_objects::ProjectNames;

/// Result of creating a project
#[derive(Debug, Clone)]
pub struct NewProjectReport {
    pub names: ProjectNames,
    /// Directory the project was created in
    pub target: PathBuf,
    pub substitution: SubstitutionReport,
    /// Whether template history was replaced by a fresh repository
    pub history_reset: bool,
}

impl NewProjectReport {
    pub fn has_failures(&self) -> bool {
        self.substitution.has_failures()
    }
}
