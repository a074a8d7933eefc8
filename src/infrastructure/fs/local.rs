//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, TextRead, Walk, WalkEntry};
use crate::domain::value_objects::ExcludePatterns;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_text(&self, path: &Path) -> FsResult<TextRead> {
        let bytes = std::fs::read(path).map_err(|e| FsError::at(path, e))?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => TextRead::Text(text),
            Err(_) => TextRead::Unreadable,
        })
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        // Truncate in place so permissions and ownership survive
        std::fs::write(path, content).map_err(|e| FsError::at(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut children = std::fs::read_dir(path)
            .map_err(|e| FsError::at(path, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| FsError::at(path, e))?;
        children.sort();
        Ok(children)
    }

    fn remove_empty_dir(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        if self.is_dir(path) {
            std::fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
        } else {
            std::fs::remove_file(path).map_err(|e| FsError::at(path, e))
        }
    }

    fn walk(&self, root: &Path, excludes: &ExcludePatterns) -> Walk {
        let base = root.to_path_buf();
        let excludes = excludes.clone();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                let rel = entry.path().strip_prefix(&base).unwrap_or(entry.path());
                !excludes.is_excluded(rel, entry.file_type().is_dir())
            })
            .map(|entry| {
                entry
                    .map(|e| WalkEntry {
                        depth: e.depth(),
                        is_dir: e.file_type().is_dir(),
                        is_symlink: e.path_is_symlink(),
                        path: e.into_path(),
                    })
                    .map_err(|e| {
                        let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                        match e.into_io_error() {
                            Some(io) => FsError::at(&path, io),
                            None => FsError::Other(format!(
                                "filesystem loop at {}",
                                path.display()
                            )),
                        }
                    })
            });

        Box::new(walker)
    }
}
