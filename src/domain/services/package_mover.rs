//! Package relocation service
//!
//! For namespace-as-directory source trees (`com.acme.app` lives at
//! `com/acme/app` below a source root), moves the old package directory's
//! children to the new package directory and prunes what is left empty.
//! File contents are never touched here; the content pass rewrites the
//! package declarations separately.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::ports::{FileSystem, FsResult, SubstitutionEvent, SubstitutionEventSink};
use crate::domain::value_objects::{ExcludePatterns, Namespace, SourceRoots};

/// Aggregate outcome of one relocation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Source roots found below the project root
    pub source_roots: usize,
    /// Direct children of old package directories that were moved
    pub moved: usize,
    /// Destinations that already existed and were overwritten or merged
    pub collisions: usize,
    /// Entries that could not be moved
    pub failed: Vec<PathBuf>,
}

impl MoveReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Moves package directories from one namespace to another.
pub struct PackageMover<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    source_roots: &'a SourceRoots,
    excludes: &'a ExcludePatterns,
}

impl<'a, FS: FileSystem + ?Sized> PackageMover<'a, FS> {
    pub fn new(fs: &'a FS, source_roots: &'a SourceRoots, excludes: &'a ExcludePatterns) -> Self {
        Self {
            fs,
            source_roots,
            excludes,
        }
    }

    /// Relocate `old` to `new` under every source root below `root`.
    pub fn relocate(
        &self,
        root: &Path,
        old: &Namespace,
        new: &Namespace,
        events: &dyn SubstitutionEventSink,
    ) -> MoveReport {
        events.on_event(SubstitutionEvent::PackageMoveStarted {
            root: root.to_path_buf(),
            old: old.to_string(),
            new: new.to_string(),
        });

        let mut report = MoveReport::default();

        if old != new {
            let roots = self.find_source_roots(root);
            report.source_roots = roots.len();
            for source_root in roots {
                self.relocate_in(&source_root, old, new, events, &mut report);
            }
        }

        info!(
            old = %old,
            new = %new,
            source_roots = report.source_roots,
            moved = report.moved,
            collisions = report.collisions,
            "package relocation finished"
        );
        events.on_event(SubstitutionEvent::PackageMoveCompleted {
            source_roots: report.source_roots,
            moved: report.moved,
            collisions: report.collisions,
        });

        report
    }

    /// Directories named like a source root, found before anything moves.
    fn find_source_roots(&self, root: &Path) -> Vec<PathBuf> {
        self.fs
            .walk(root, self.excludes)
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable tree entry");
                    None
                }
            })
            .filter(|entry| entry.is_dir && self.source_roots.is_source_root(&entry.path))
            .map(|entry| entry.path)
            .collect()
    }

    fn relocate_in(
        &self,
        source_root: &Path,
        old: &Namespace,
        new: &Namespace,
        events: &dyn SubstitutionEventSink,
        report: &mut MoveReport,
    ) {
        let old_dir = old.dir_under(source_root);
        if !self.fs.is_dir(&old_dir) {
            debug!(source_root = %source_root.display(), package = %old, "package not present");
            return;
        }

        let new_dir = new.dir_under(source_root);
        if let Err(e) = self.fs.create_dir_all(&new_dir) {
            warn!(path = %new_dir.display(), error = %e, "cannot create package directory");
            report.failed.push(old_dir.clone());
            events.on_event(SubstitutionEvent::MoveFailed {
                path: old_dir,
                error: e.to_string(),
            });
            return;
        }

        let children = match self.fs.read_dir(&old_dir) {
            Ok(children) => children,
            Err(e) => {
                warn!(path = %old_dir.display(), error = %e, "cannot list package directory");
                report.failed.push(old_dir.clone());
                events.on_event(SubstitutionEvent::MoveFailed {
                    path: old_dir,
                    error: e.to_string(),
                });
                return;
            }
        };

        for child in children {
            // The new package may live inside the old one (a.b -> a.b.c)
            if new_dir.starts_with(&child) {
                continue;
            }
            let Some(name) = child.file_name() else {
                continue;
            };
            let destination = new_dir.join(name);

            match self.move_entry(&child, &destination, events, report) {
                Ok(()) => {
                    debug!(from = %child.display(), to = %destination.display(), "moved");
                    report.moved += 1;
                    events.on_event(SubstitutionEvent::EntryMoved {
                        from: child,
                        to: destination,
                    });
                }
                Err(e) => {
                    warn!(path = %child.display(), error = %e, "move failed");
                    report.failed.push(child.clone());
                    events.on_event(SubstitutionEvent::MoveFailed {
                        path: child,
                        error: e.to_string(),
                    });
                }
            }
        }

        self.prune(&old_dir, source_root, &new_dir, events);
    }

    /// Move `from` to `to`, merging directories and overwriting anything else.
    fn move_entry(
        &self,
        from: &Path,
        to: &Path,
        events: &dyn SubstitutionEventSink,
        report: &mut MoveReport,
    ) -> FsResult<()> {
        if self.fs.exists(to) {
            warn!(path = %to.display(), "destination exists, last write wins");
            report.collisions += 1;
            events.on_event(SubstitutionEvent::MoveCollision {
                path: to.to_path_buf(),
            });

            if self.fs.is_dir(from) && self.fs.is_dir(to) {
                for child in self.fs.read_dir(from)? {
                    if let Some(name) = child.file_name() {
                        self.move_entry(&child, &to.join(name), events, report)?;
                    }
                }
                return self.fs.remove_empty_dir(from);
            }

            self.fs.remove_all(to)?;
        }

        self.fs.rename(from, to)
    }

    /// Remove empty directories from `start` up to, not including, `source_root`.
    ///
    /// Stops at the first directory that is non-empty, cannot be removed, or
    /// still leads to the new package directory.
    fn prune(
        &self,
        start: &Path,
        source_root: &Path,
        new_dir: &Path,
        events: &dyn SubstitutionEventSink,
    ) {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir == source_root || !dir.starts_with(source_root) || new_dir.starts_with(dir) {
                break;
            }
            if self.fs.remove_empty_dir(dir).is_err() {
                break;
            }
            debug!(path = %dir.display(), "pruned empty directory");
            events.on_event(SubstitutionEvent::DirectoryPruned {
                path: dir.to_path_buf(),
            });
            current = dir.parent();
        }
    }
}
