//! Configuration module for Scaffold
//!
//! Implements configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCAFFOLD_*)
//! 3. Project config (./scaffold.toml or --config PATH)
//! 4. User config (~/.config/scaffold/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{split_list, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, OutputConfig, SubstitutionConfig, TemplateConfig, Verbosity,
};
