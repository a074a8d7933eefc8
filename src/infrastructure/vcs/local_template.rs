//! Local directory template adapter
//!
//! Treats the repository argument as a directory and copies it. The
//! template's own history is never copied; the new project still gets a
//! fresh repository through git.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::git::GitCli;
use crate::domain::ports::VersionControl;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Version control backed by a plain directory copy
#[derive(Debug, Clone, Default)]
pub struct LocalTemplate {
    git: GitCli,
}

impl LocalTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitialize through a specific git client
    pub fn with_git(git: GitCli) -> Self {
        Self { git }
    }
}

fn walk_error(e: walkdir::Error) -> ScaffoldError {
    match e.into_io_error() {
        Some(io) => ScaffoldError::Io(io),
        None => ScaffoldError::Vcs {
            command: "copy".to_string(),
            message: "filesystem loop in template".to_string(),
        },
    }
}

impl VersionControl for LocalTemplate {
    fn fetch(&self, repository: &str, destination: &Path) -> ScaffoldResult<()> {
        let source = Path::new(repository);
        if !source.is_dir() {
            return Err(ScaffoldError::DirectoryNotFound {
                path: source.to_path_buf(),
            });
        }
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
        let copy = staging.path().join("template");

        for entry in WalkDir::new(source).follow_links(false) {
            let entry = entry.map_err(walk_error)?;
            let rel = entry.path().strip_prefix(source).unwrap_or(entry.path());
            if rel.starts_with(".git") {
                continue;
            }
            let target = copy.join(rel);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                std::fs::copy(entry.path(), &target)?;
            } else {
                debug!(path = %entry.path().display(), "skipping non-regular template entry");
            }
        }

        std::fs::rename(&copy, destination)?;
        Ok(())
    }

    fn reinitialize(&self, root: &Path) -> ScaffoldResult<()> {
        self.git.reinitialize(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copies_tree_without_history() {
        let template = tempdir().unwrap();
        fs::create_dir_all(template.path().join("src/main/kotlin")).unwrap();
        fs::create_dir_all(template.path().join(".git")).unwrap();
        fs::write(template.path().join("src/main/kotlin/App.kt"), "class App").unwrap();
        fs::write(template.path().join(".git/HEAD"), "ref").unwrap();

        let out = tempdir().unwrap();
        let target = out.path().join("acme");
        LocalTemplate::new()
            .fetch(template.path().to_str().unwrap(), &target)
            .unwrap();

        assert_eq!(
            fs::read_to_string(target.join("src/main/kotlin/App.kt")).unwrap(),
            "class App"
        );
        assert!(!target.join(".git").exists());
        // Only the project itself, the staging directory is gone
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_template_is_reported() {
        let out = tempdir().unwrap();
        let err = LocalTemplate::new()
            .fetch("/definitely/not/here", &out.path().join("acme"))
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::DirectoryNotFound { .. }));
    }

    #[test]
    fn reinitialize_starts_a_fresh_repository() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        fs::write(dir.path().join(".git/template-marker"), "old").unwrap();

        LocalTemplate::new().reinitialize(dir.path()).unwrap();

        assert!(dir.path().join(".git").is_dir());
        assert!(dir.path().join(".git/HEAD").exists());
        assert!(!dir.path().join(".git/template-marker").exists());
    }

    #[test]
    fn reinitialize_reports_missing_git() {
        let dir = tempdir().unwrap();
        let local = LocalTemplate::with_git(GitCli::new("scaffold-test-no-such-git"));

        let err = local.reinitialize(dir.path()).unwrap_err();

        assert!(matches!(err, ScaffoldError::Vcs { .. }));
    }
}
