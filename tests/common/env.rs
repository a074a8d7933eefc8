//! Test environment builder for isolated Scaffold testing.
//!
//! Provides `TestEnv` - a temp workspace with its own config home, plus
//! helpers to run the Scaffold CLI inside it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::write_template;

const SCAFFOLD_ENV: &[&str] = &[
    "SCAFFOLD_TEMPLATE_REPO",
    "SCAFFOLD_EXTENSIONS",
    "SCAFFOLD_SOURCE_ROOTS",
    "SCAFFOLD_VERBOSITY",
    "SCAFFOLD_LOG",
];

/// Result of running a Scaffold CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// Commands run with the workspace as working directory, colors disabled
/// and the user config directory pointed inside the workspace.
pub struct TestEnv {
    pub workspace: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Path relative to the workspace
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Directory holding the fixture template (if the builder wrote one)
    pub fn template_dir(&self) -> PathBuf {
        self.path("template")
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Run scaffold from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run scaffold from the workspace root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.workspace.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = scaffold_command(self.workspace.path());
        cmd.current_dir(cwd).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute scaffold");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// The scaffold binary with a hermetic environment rooted at `home`
pub fn scaffold_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scaffold"));
    for key in SCAFFOLD_ENV {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[derive(Default)]
pub struct TestEnvBuilder {
    with_template: bool,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Write the fixture template under `template/`
    pub fn with_template(mut self) -> Self {
        self.with_template = true;
        self
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            workspace: tempfile::tempdir().expect("failed to create workspace"),
        };
        if self.with_template {
            write_template(&env.template_dir());
        }
        for (relative, content) in &self.files {
            env.write(relative, content);
        }
        env
    }
}
