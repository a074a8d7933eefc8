//! Content replacement service
//!
//! Rewrites literal token occurrences inside text files. Every write is read
//! back and compared with the expected text; a mismatch puts the original
//! content back. One bad file never stops the walk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::ports::{FileSystem, SubstitutionEvent, SubstitutionEventSink, TextRead};
use crate::domain::value_objects::{ExcludePatterns, ExtensionAllowlist};

/// Aggregate outcome of one content pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentReport {
    /// Files whose name matched the allowlist
    pub examined: usize,
    /// Files rewritten and verified
    pub modified: usize,
    /// Files that could not be read, written or verified
    pub failed: Vec<PathBuf>,
}

impl ContentReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileOutcome {
    /// Token absent
    Untouched,
    /// Not decodable as text
    Unreadable,
    Replaced,
    /// Written content did not read back as expected
    Rejected(String),
    /// Read or write failed
    Error(String),
}

/// Replaces a literal token in every allowed file below a root.
pub struct ContentReplacer<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    allowlist: &'a ExtensionAllowlist,
    excludes: &'a ExcludePatterns,
}

impl<'a, FS: FileSystem + ?Sized> ContentReplacer<'a, FS> {
    pub fn new(fs: &'a FS, allowlist: &'a ExtensionAllowlist, excludes: &'a ExcludePatterns) -> Self {
        Self {
            fs,
            allowlist,
            excludes,
        }
    }

    /// Replace every occurrence of `old` with `new` in allowed files under `root`.
    pub fn replace(
        &self,
        root: &Path,
        old: &str,
        new: &str,
        events: &dyn SubstitutionEventSink,
    ) -> ContentReport {
        events.on_event(SubstitutionEvent::ContentStarted {
            root: root.to_path_buf(),
            old: old.to_string(),
            new: new.to_string(),
        });

        let mut report = ContentReport::default();

        for entry in self.fs.walk(root, self.excludes) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable tree entry");
                    events.on_event(SubstitutionEvent::ContentError {
                        path: root.to_path_buf(),
                        error: e.to_string(),
                    });
                    report.failed.push(root.to_path_buf());
                    continue;
                }
            };

            // Links are never followed, so content outside the tree stays untouched
            if entry.is_dir || entry.is_symlink || !self.allowlist.allows(&entry.path) {
                continue;
            }
            report.examined += 1;

            match self.replace_in_file(&entry.path, old, new) {
                FileOutcome::Untouched => {}
                FileOutcome::Unreadable => {
                    debug!(path = %entry.path.display(), "skipping undecodable file");
                }
                FileOutcome::Replaced => {
                    debug!(path = %entry.path.display(), "content replaced");
                    report.modified += 1;
                    events.on_event(SubstitutionEvent::ContentReplaced { path: entry.path });
                }
                FileOutcome::Rejected(reason) => {
                    warn!(path = %entry.path.display(), %reason, "replacement not verified, original restored");
                    report.failed.push(entry.path.clone());
                    events.on_event(SubstitutionEvent::ContentFailed {
                        path: entry.path,
                        reason,
                    });
                }
                FileOutcome::Error(error) => {
                    warn!(path = %entry.path.display(), %error, "content replacement failed");
                    report.failed.push(entry.path.clone());
                    events.on_event(SubstitutionEvent::ContentError {
                        path: entry.path,
                        error,
                    });
                }
            }
        }

        info!(
            old,
            new,
            examined = report.examined,
            modified = report.modified,
            failed = report.failed.len(),
            "content replacement finished"
        );
        events.on_event(SubstitutionEvent::ContentCompleted {
            examined: report.examined,
            modified: report.modified,
            failed: report.failed.len(),
        });

        report
    }

    fn replace_in_file(&self, path: &Path, old: &str, new: &str) -> FileOutcome {
        let original = match self.fs.read_text(path) {
            Ok(TextRead::Text(text)) => text,
            Ok(TextRead::Unreadable) => return FileOutcome::Unreadable,
            Err(e) => return FileOutcome::Error(e.to_string()),
        };

        if !original.contains(old) {
            return FileOutcome::Untouched;
        }

        let expected = original.replace(old, new);
        if let Err(e) = self.fs.write(path, &expected) {
            // A failed write may still have truncated the file
            return match self.restore(path, &original) {
                Ok(()) => FileOutcome::Error(e.to_string()),
                Err(restore) => FileOutcome::Error(format!("{}; restore failed: {}", e, restore)),
            };
        }

        let reason = match self.fs.read_text(path) {
            Ok(TextRead::Text(actual)) if actual == expected => return FileOutcome::Replaced,
            Ok(TextRead::Text(_)) => "content on disk differs from the substituted text".to_string(),
            Ok(TextRead::Unreadable) => "content on disk is no longer text".to_string(),
            Err(e) => format!("read-back failed: {}", e),
        };

        match self.restore(path, &original) {
            Ok(()) => FileOutcome::Rejected(reason),
            Err(e) => FileOutcome::Error(format!("{}; restore failed: {}", reason, e)),
        }
    }

    fn restore(&self, path: &Path, original: &str) -> Result<(), String> {
        self.fs.write(path, original).map_err(|e| e.to_string())
    }
}
