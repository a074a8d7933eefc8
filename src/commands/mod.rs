//! Command handlers
//!
//! One `cmd_*` function per subcommand. Handlers resolve configuration into
//! use-case options, run the use case and render the summary.

mod apply;
mod config;
mod new;

pub use apply::cmd_apply;
pub use config::cmd_config;
pub use new::cmd_new;

use scaffold::error::ScaffoldError;

/// Emit a JSON error event before bailing out in `--json` mode.
pub(crate) fn emit_json_error(command: &str, error: &ScaffoldError) {
    let kind = match error {
        ScaffoldError::Io(_) => "io",
        ScaffoldError::InvalidRule { .. } => "invalid_rule",
        ScaffoldError::InvalidNamespace { .. } => "invalid_namespace",
        ScaffoldError::InvalidProjectName { .. } => "invalid_project_name",
        ScaffoldError::DirectoryNotFound { .. } => "directory_not_found",
        ScaffoldError::TargetExists { .. } => "target_exists",
        ScaffoldError::ConfigParse { .. } => "config_parse",
        ScaffoldError::InvalidPattern { .. } => "invalid_pattern",
        ScaffoldError::Vcs { .. } => "vcs",
    };
    let event = serde_json::json!({
        "event": "error",
        "command": command,
        "kind": kind,
        "message": error.to_string(),
    });
    println!(
        "{}",
        serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string())
    );
}
