//! Substitution options

use crate::domain::value_objects::{
    ExcludePatterns, ExtensionAllowlist, SourceRoots, DEFAULT_EXCLUDES,
};

/// Options shared by every rule of a substitution run
#[derive(Debug, Clone)]
pub struct SubstitutionOptions {
    /// Files eligible for content replacement
    pub extensions: ExtensionAllowlist,
    /// Directory names that start a namespace-as-path hierarchy
    pub source_roots: SourceRoots,
    /// Paths never walked
    pub excludes: ExcludePatterns,
}

impl Default for SubstitutionOptions {
    fn default() -> Self {
        Self {
            extensions: ExtensionAllowlist::default(),
            source_roots: SourceRoots::default(),
            excludes: ExcludePatterns::new(DEFAULT_EXCLUDES.iter().copied()).unwrap_or_default(),
        }
    }
}

impl SubstitutionOptions {
    /// Create options with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension allowlist
    pub fn with_extensions(mut self, extensions: ExtensionAllowlist) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the source-root names
    pub fn with_source_roots(mut self, source_roots: SourceRoots) -> Self {
        self.source_roots = source_roots;
        self
    }

    /// Set exclusion patterns
    pub fn with_excludes(mut self, excludes: ExcludePatterns) -> Self {
        self.excludes = excludes;
        self
    }
}
