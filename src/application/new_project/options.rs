//! New project options

use std::path::PathBuf;

use crate::application::substitution::SubstitutionOptions;
use crate::domain::value_objects::SubstitutionRule;

/// Template used when none is configured
pub const DEFAULT_TEMPLATE_REPOSITORY: &str = "https://github.com/embabel/kotlin-agent-template";

/// Placeholder for the project name inside the template
pub const DEFAULT_PROJECT_TOKEN: &str = "ProjectName";

/// Package the template's sources live in
pub const DEFAULT_PACKAGE_TOKEN: &str = "com.embabel.template";

/// Prefix of the package derived when none is given
pub const DEFAULT_PACKAGE_PREFIX: &str = "com.example";

/// Options for the new command
#[derive(Debug, Clone)]
pub struct NewProjectOptions {
    /// Name as typed by the user
    pub project_name: String,
    /// Explicit package (None = derived from the project name)
    pub package: Option<String>,
    /// Template location passed to the version-control port
    pub repository: String,
    /// Directory the project directory is created in
    pub parent_dir: PathBuf,
    /// Keep the template's history instead of starting fresh
    pub keep_history: bool,
    pub project_token: String,
    pub package_token: String,
    pub default_package_prefix: String,
    /// Rules applied after the project and package rules
    pub extra_rules: Vec<SubstitutionRule>,
    pub substitution: SubstitutionOptions,
}

impl NewProjectOptions {
    /// Create options for `project_name` with the built-in defaults
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            package: None,
            repository: DEFAULT_TEMPLATE_REPOSITORY.to_string(),
            parent_dir: PathBuf::from("."),
            keep_history: false,
            project_token: DEFAULT_PROJECT_TOKEN.to_string(),
            package_token: DEFAULT_PACKAGE_TOKEN.to_string(),
            default_package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            extra_rules: Vec::new(),
            substitution: SubstitutionOptions::default(),
        }
    }

    /// Set the package
    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    /// Set the template repository
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Set the parent directory
    pub fn with_parent_dir(mut self, parent_dir: impl Into<PathBuf>) -> Self {
        self.parent_dir = parent_dir.into();
        self
    }

    /// Keep template history
    pub fn with_keep_history(mut self, keep_history: bool) -> Self {
        self.keep_history = keep_history;
        self
    }

    /// Set the template's placeholder tokens
    pub fn with_tokens(
        mut self,
        project_token: impl Into<String>,
        package_token: impl Into<String>,
    ) -> Self {
        self.project_token = project_token.into();
        self.package_token = package_token.into();
        self
    }

    /// Set the prefix used for derived packages
    pub fn with_default_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_package_prefix = prefix.into();
        self
    }

    /// Set additional rules
    pub fn with_extra_rules(mut self, rules: Vec<SubstitutionRule>) -> Self {
        self.extra_rules = rules;
        self
    }

    /// Set substitution options
    pub fn with_substitution(mut self, substitution: SubstitutionOptions) -> Self {
        self.substitution = substitution;
        self
    }
}
