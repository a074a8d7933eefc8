//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros list the tree on failure to aid debugging.

use std::path::Path;

/// All files below `dir`, relative and sorted
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Assert that a path exists below a root.
///
/// # Example
/// ```ignore
/// assert_exists!(root, "src/main/kotlin/com/acme/App.kt");
/// ```
#[macro_export]
macro_rules! assert_exists {
    ($root:expr, $path:expr) => {
        let root = std::path::Path::new(&$root).to_path_buf();
        assert!(
            root.join($path).exists(),
            "Expected '{}' to exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files(&root).join("\n  ")
        );
    };
}

/// Assert that a path does not exist below a root.
#[macro_export]
macro_rules! assert_missing {
    ($root:expr, $path:expr) => {
        let root = std::path::Path::new(&$root).to_path_buf();
        assert!(
            !root.join($path).exists(),
            "Expected '{}' to be gone.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files(&root).join("\n  ")
        );
    };
}
