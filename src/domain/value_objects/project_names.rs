//! Project name derivation
//!
//! From a single user-supplied project name the orchestrator derives the
//! token replacement (capitalized), the directory to create (first letter
//! lower-cased) and, when no package is given, a default package.

use crate::error::{ScaffoldError, ScaffoldResult};

use super::namespace::Namespace;

/// Names derived from the user's project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    capitalized: String,
    directory: String,
    package: Namespace,
}

impl ProjectNames {
    /// Derive names; `package` falls back to `<default_prefix>.<directory>`.
    pub fn derive(
        project_name: &str,
        package: Option<&str>,
        default_prefix: &str,
    ) -> ScaffoldResult<Self> {
        let name = project_name.trim();
        if name.is_empty() {
            return Err(ScaffoldError::InvalidProjectName {
                name: project_name.to_string(),
                message: "project name is required".to_string(),
            });
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(ScaffoldError::InvalidProjectName {
                name: project_name.to_string(),
                message: "project name must be a single directory name".to_string(),
            });
        }

        let capitalized = with_first_char(name, |c| c.to_uppercase().collect());
        let directory = with_first_char(name, |c| c.to_lowercase().collect());

        let package = match package.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Namespace::parse(p)?,
            None => Namespace::parse(&format!("{}.{}", default_prefix, directory))?,
        };

        Ok(Self {
            capitalized,
            directory,
            package,
        })
    }

    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn package(&self) -> &Namespace {
        &self.package
    }
}

fn with_first_char(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => f(c) + chars.as_str(),
    }
}
