//! Extension allowlist and source-root names

use std::collections::BTreeSet;
use std::path::Path;

/// Suffixes eligible for content replacement when nothing is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".java",
    ".kt",
    ".kts",
    ".properties",
    ".yml",
    ".yaml",
    ".md",
    ".gradle",
    ".xml",
    ".json",
];

/// Directory names that mark the top of a namespace-as-path hierarchy.
pub const DEFAULT_SOURCE_ROOTS: &[&str] = &["kotlin", "java"];

/// Set of file-name suffixes whose files may have their content rewritten.
///
/// Matching is a plain `ends_with` on the file name, so multi-part suffixes
/// like `.gradle.kts` work and a leading dot is optional in configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionAllowlist {
    suffixes: BTreeSet<String>,
}

impl Default for ExtensionAllowlist {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl ExtensionAllowlist {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty() && s != ".")
            .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
            .collect();
        Self { suffixes }
    }

    /// Whether the file name of `path` ends with an allowed suffix.
    pub fn allows(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// Recognized source-root directory names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoots {
    names: BTreeSet<String>,
}

impl Default for SourceRoots {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_ROOTS.iter().copied())
    }
}

impl SourceRoots {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { names }
    }

    /// Whether a directory with this file name is a source root.
    pub fn is_source_root(&self, dir: &Path) -> bool {
        dir.file_name()
            .map(|n| self.names.contains(n.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_allowlist_covers_build_and_source_files() {
        let allow = ExtensionAllowlist::default();
        assert!(allow.allows(Path::new("src/main/kotlin/App.kt")));
        assert!(allow.allows(Path::new("build.gradle.kts")));
        assert!(allow.allows(Path::new("README.md")));
        assert!(allow.allows(Path::new("application.yml")));
        assert!(!allow.allows(Path::new("gradlew")));
        assert!(!allow.allows(Path::new("logo.png")));
    }

    #[test]
    fn leading_dot_is_optional() {
        let allow = ExtensionAllowlist::new(["rs", ".toml"]);
        assert!(allow.allows(Path::new("main.rs")));
        assert!(allow.allows(Path::new("Cargo.toml")));
        assert_eq!(allow.len(), 2);
    }

    #[test]
    fn suffix_must_match_end_of_name() {
        let allow = ExtensionAllowlist::new([".md"]);
        assert!(!allow.allows(Path::new("notes.md.bak")));
        assert!(!allow.allows(&PathBuf::from("/")));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let allow = ExtensionAllowlist::new(["", " ", "."]);
        assert!(allow.is_empty());
    }

    #[test]
    fn source_roots_match_directory_name() {
        let roots = SourceRoots::default();
        assert!(roots.is_source_root(Path::new("app/src/main/kotlin")));
        assert!(roots.is_source_root(Path::new("src/test/java")));
        assert!(!roots.is_source_root(Path::new("src/main/resources")));
    }

    #[test]
    fn source_roots_are_configurable() {
        let roots = SourceRoots::new(["scala"]);
        assert!(roots.is_source_root(Path::new("src/main/scala")));
        assert!(!roots.is_source_root(Path::new("src/main/kotlin")));
    }
}
