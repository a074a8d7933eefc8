//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::new_project::{
    DEFAULT_PACKAGE_PREFIX, DEFAULT_PACKAGE_TOKEN, DEFAULT_PROJECT_TOKEN,
    DEFAULT_TEMPLATE_REPOSITORY,
};
use crate::application::SubstitutionOptions;
use crate::domain::value_objects::{
    ExcludePatterns, ExtensionAllowlist, SourceRoots, SubstitutionRule, DEFAULT_EXCLUDES,
    DEFAULT_EXTENSIONS, DEFAULT_SOURCE_ROOTS,
};
use crate::error::ScaffoldResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Template configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_repository")]
    pub repository: String,

    #[serde(default = "default_project_token")]
    pub project_token: String,

    #[serde(default = "default_package_token")]
    pub package_token: String,

    #[serde(default = "default_package_prefix")]
    pub default_package_prefix: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            project_token: default_project_token(),
            package_token: default_package_token(),
            default_package_prefix: default_package_prefix(),
        }
    }
}

fn default_repository() -> String {
    DEFAULT_TEMPLATE_REPOSITORY.to_string()
}

fn default_project_token() -> String {
    DEFAULT_PROJECT_TOKEN.to_string()
}

fn default_package_token() -> String {
    DEFAULT_PACKAGE_TOKEN.to_string()
}

fn default_package_prefix() -> String {
    DEFAULT_PACKAGE_PREFIX.to_string()
}

/// Substitution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            source_roots: default_source_roots(),
            exclude: default_exclude(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_source_roots() -> Vec<String> {
    DEFAULT_SOURCE_ROOTS.iter().map(|s| s.to_string()).collect()
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, falling back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Combine with the `-v` count from the command line; the louder wins
    pub fn raised_by(self, verbose_flags: u8) -> Self {
        let from_flags = match verbose_flags {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        if verbose_flags == 0 {
            self
        } else {
            self.max(from_flags)
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub substitution: SubstitutionConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra rules applied after the project and package rules
    #[serde(default)]
    pub rules: Vec<SubstitutionRule>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve explicit, project, user config or defaults, then env overrides
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> ScaffoldResult<LoadedConfig> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (SCAFFOLD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Validated extra rules
    pub fn extra_rules(&self) -> ScaffoldResult<Vec<SubstitutionRule>> {
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(self.rules.clone())
    }

    /// Substitution options built from the `[substitution]` section
    pub fn substitution_options(&self) -> ScaffoldResult<SubstitutionOptions> {
        Ok(SubstitutionOptions::new()
            .with_extensions(ExtensionAllowlist::new(&self.substitution.extensions))
            .with_source_roots(SourceRoots::new(&self.substitution.source_roots))
            .with_excludes(ExcludePatterns::new(&self.substitution.exclude)?))
    }

    /// Render as TOML (for `scaffold config`)
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
