//! Namespace value object
//!
//! A dotted namespace (`com.acme.widget`) and its directory mapping
//! (`com/acme/widget`).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// A validated dot-separated namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Parse a dotted namespace.
    ///
    /// Every segment must be non-empty and usable as a single directory name.
    pub fn parse(raw: &str) -> ScaffoldResult<Self> {
        let invalid = |message: &str| ScaffoldError::InvalidNamespace {
            namespace: raw.to_string(),
            message: message.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("namespace is empty"));
        }

        let mut segments = Vec::new();
        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
            if segment.contains('/') || segment.contains('\\') {
                return Err(invalid("segments must not contain path separators"));
            }
            if segment.trim() != segment {
                return Err(invalid("segments must not contain surrounding whitespace"));
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Relative directory path for this namespace (`a.b.c` → `a/b/c`).
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Directory for this namespace below `source_root`.
    pub fn dir_under(&self, source_root: &Path) -> PathBuf {
        source_root.join(self.to_relative_path())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
