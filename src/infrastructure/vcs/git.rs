//! Git command-line adapter
//!
//! Shells out to `git`. Clones land in a staging directory next to the
//! target and are renamed into place only once complete, so a failed clone
//! never leaves a half-populated project behind.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::VersionControl;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Version control through the `git` binary
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    /// Use a specific git executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> ScaffoldResult<()> {
        let command = format!("{} {}", self.program, args.first().copied().unwrap_or_default());
        debug!(command = %command, args = ?args, "running");

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| ScaffoldError::Vcs {
            command: command.clone(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScaffoldError::Vcs {
                command,
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

impl VersionControl for GitCli {
    fn fetch(&self, repository: &str, destination: &Path) -> ScaffoldResult<()> {
        if destination.exists() {
            return Err(ScaffoldError::TargetExists {
                path: destination.to_path_buf(),
            });
        }

        let parent = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let staging = tempfile::Builder::new()
            .prefix(".scaffold-")
            .tempdir_in(parent)?;
        let checkout = staging.path().join("template");
        let checkout_arg = checkout.to_string_lossy();

        self.run(
            &["clone", "--depth", "1", "--quiet", "--", repository, checkout_arg.as_ref()],
            None,
        )?;

        std::fs::rename(&checkout, destination)?;
        Ok(())
    }

    fn reinitialize(&self, root: &Path) -> ScaffoldResult<()> {
        let history = root.join(".git");
        if history.exists() {
            std::fs::remove_dir_all(&history)?;
        }
        self.run(&["init", "--quiet"], Some(root))
    }
}
