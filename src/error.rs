//! Error types for Scaffold
//!
//! Uses `thiserror` for library errors. Per-file problems inside the
//! substitution engine are never errors: they are reported as events and
//! collected in the operation reports.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Scaffold operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for Scaffold operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Substitution rule with an empty side or malformed `OLD=NEW` argument
    #[error("invalid rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    /// Dotted namespace that cannot be mapped to a directory path
    #[error("invalid namespace '{namespace}': {message}")]
    InvalidNamespace { namespace: String, message: String },

    /// Project name that cannot become a directory name
    #[error("invalid project name '{name}': {message}")]
    InvalidProjectName { name: String, message: String },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Target project directory already exists
    #[error("directory {path} already exists")]
    TargetExists { path: PathBuf },

    /// Invalid config file
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Exclusion pattern rejected by the gitignore matcher
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// External version-control command failed
    #[error("{command} failed: {message}")]
    Vcs { command: String, message: String },
}
