//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclude_patterns;
mod extensions;
mod namespace;
mod project_names;
mod rule;

pub use exclude_patterns::{ExcludePatterns, DEFAULT_EXCLUDES};
pub use extensions::{ExtensionAllowlist, SourceRoots, DEFAULT_EXTENSIONS, DEFAULT_SOURCE_ROOTS};
pub use namespace::Namespace;
pub use project_names::ProjectNames;
pub use rule::{parse_rule_arg, RuleSet, SubstitutionRule};
