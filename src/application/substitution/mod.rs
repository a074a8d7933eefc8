//! Substitution Use Case
//!
//! Applies an ordered rule set to a project tree.
//!
//! For each rule, in order:
//! - Rewrite the token inside allowed files
//! - Plain rules: rename files and directories containing the token
//! - Structural rules: relocate the package directory under each source root

mod options;
mod result;
mod use_case;


pub use options::SubstitutionOptions;
pub use result::{PathOutcome, RuleOutcome, SubstitutionReport};
pub use use_case::SubstitutionUseCase;
