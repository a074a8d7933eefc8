//! FileSystem port - abstraction over file I/O operations
//!
//! The substitution services perform all tree access through this trait so
//! they can be exercised against failing implementations in tests.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExcludePatterns;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Destination already exists
    AlreadyExists(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::AlreadyExists(path) => write!(f, "Already exists: {}", path.display()),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Outcome of reading a file as text.
///
/// Undecodable content is not an error: callers skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRead {
    /// UTF-8 content
    Text(String),
    /// Content that is not valid text (binary files, other encodings)
    Unreadable,
}

/// One entry produced by a tree walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Number of components below the walked root (direct children are 1)
    pub depth: usize,
    pub is_dir: bool,
    /// The entry itself is a symbolic link (never followed)
    pub is_symlink: bool,
}

/// Lazily produced walk entries.
pub type Walk = Box<dyn Iterator<Item = FsResult<WalkEntry>>>;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Read file content, distinguishing text from undecodable content
    fn read_text(&self, path: &Path) -> FsResult<TextRead>;

    /// Replace the content of a file
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a path exists (without following a final symlink)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Rename or move a file or directory
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Direct children of a directory, sorted by name
    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;

    /// Remove a directory only if it is empty
    fn remove_empty_dir(&self, path: &Path) -> FsResult<()>;

    /// Remove a file or a whole directory tree
    fn remove_all(&self, path: &Path) -> FsResult<()>;

    /// Walk everything below `root` (excluding `root` itself) in name order,
    /// never descending into excluded paths
    fn walk(&self, root: &Path, excludes: &ExcludePatterns) -> Walk;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_text(&self, path: &Path) -> FsResult<TextRead> {
        (**self).read_text(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).rename(from, to)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).read_dir(path)
    }

    fn remove_empty_dir(&self, path: &Path) -> FsResult<()> {
        (**self).remove_empty_dir(path)
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_all(path)
    }

    fn walk(&self, root: &Path, excludes: &ExcludePatterns) -> Walk {
        (**self).walk(root, excludes)
    }
}
