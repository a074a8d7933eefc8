//! Name replacement service
//!
//! Renames files and directories whose base name contains a token. The tree
//! is enumerated up front and renamed deepest-first, so renaming a directory
//! never invalidates a path that is still waiting to be processed.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::ports::{FileSystem, SubstitutionEvent, SubstitutionEventSink, WalkEntry};
use crate::domain::value_objects::ExcludePatterns;

/// Aggregate outcome of one rename pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// Entries renamed and verified
    pub renamed: usize,
    /// Entries that could not be renamed
    pub failed: Vec<PathBuf>,
}

impl RenameReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Replaces a literal token in file and directory names below a root.
pub struct NameReplacer<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    excludes: &'a ExcludePatterns,
}

impl<'a, FS: FileSystem + ?Sized> NameReplacer<'a, FS> {
    pub fn new(fs: &'a FS, excludes: &'a ExcludePatterns) -> Self {
        Self { fs, excludes }
    }

    /// Rename every entry under `root` whose base name contains `old`.
    pub fn replace(
        &self,
        root: &Path,
        old: &str,
        new: &str,
        events: &dyn SubstitutionEventSink,
    ) -> RenameReport {
        events.on_event(SubstitutionEvent::RenameStarted {
            root: root.to_path_buf(),
            old: old.to_string(),
            new: new.to_string(),
        });

        let mut report = RenameReport::default();
        let candidates = self.collect_candidates(root, old, events, &mut report);

        for entry in candidates {
            // An earlier rename in this pass may have moved it already
            if !self.fs.exists(&entry.path) {
                debug!(path = %entry.path.display(), "entry vanished before rename");
                continue;
            }

            let target = match renamed_path(&entry.path, old, new) {
                Ok(Some(target)) => target,
                Ok(None) => continue,
                Err(error) => {
                    warn!(path = %entry.path.display(), %error, "rename rejected");
                    report.failed.push(entry.path.clone());
                    events.on_event(SubstitutionEvent::RenameFailed {
                        path: entry.path,
                        error,
                    });
                    continue;
                }
            };

            match self.rename_verified(&entry.path, &target) {
                Ok(()) => {
                    debug!(from = %entry.path.display(), to = %target.display(), "renamed");
                    report.renamed += 1;
                    events.on_event(SubstitutionEvent::Renamed {
                        from: entry.path,
                        to: target,
                    });
                }
                Err(error) => {
                    warn!(path = %entry.path.display(), %error, "rename failed");
                    report.failed.push(entry.path.clone());
                    events.on_event(SubstitutionEvent::RenameFailed {
                        path: entry.path,
                        error,
                    });
                }
            }
        }

        info!(
            old,
            new,
            renamed = report.renamed,
            failed = report.failed.len(),
            "name replacement finished"
        );
        events.on_event(SubstitutionEvent::RenameCompleted {
            renamed: report.renamed,
            failed: report.failed.len(),
        });

        report
    }

    /// Snapshot of matching entries, deepest first.
    fn collect_candidates(
        &self,
        root: &Path,
        old: &str,
        events: &dyn SubstitutionEventSink,
        report: &mut RenameReport,
    ) -> Vec<WalkEntry> {
        let mut candidates = Vec::new();
        for entry in self.fs.walk(root, self.excludes) {
            match entry {
                Ok(entry) if base_name_contains(&entry.path, old) => candidates.push(entry),
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "skipping unreadable tree entry");
                    report.failed.push(root.to_path_buf());
                    events.on_event(SubstitutionEvent::RenameFailed {
                        path: root.to_path_buf(),
                        error: e.to_string(),
                    });
                }
            }
        }

        // Stable, so siblings keep walk order
        candidates.sort_by(|a, b| b.depth.cmp(&a.depth));
        candidates
    }

    fn rename_verified(&self, from: &Path, to: &Path) -> Result<(), String> {
        if self.fs.exists(to) {
            return Err(format!("destination {} already exists", to.display()));
        }

        self.fs.rename(from, to).map_err(|e| e.to_string())?;

        if self.fs.exists(to) && !self.fs.exists(from) {
            Ok(())
        } else {
            Err(format!(
                "rename to {} could not be verified",
                to.display()
            ))
        }
    }
}

fn base_name_contains(path: &Path, token: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(token))
        .unwrap_or(false)
}

/// Sibling path with `old` replaced in the base name, if it changes.
///
/// The replaced name must stay a single plain component so the entry never
/// leaves its parent directory.
fn renamed_path(path: &Path, old: &str, new: &str) -> Result<Option<PathBuf>, String> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };
    let replaced = name.replace(old, new);
    if replaced == name {
        return Ok(None);
    }

    let mut components = Path::new(&replaced).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || replaced.contains(['/', '\\']) {
        return Err(format!("{:?} is not a valid file name", replaced));
    }
    Ok(Some(path.with_file_name(replaced)))
}
