//! Version Control Implementations
//!
//! - `GitCli` - clones with the `git` binary and runs `git init`
//! - `LocalTemplate` - copies a template directory from disk

mod git;
mod local_template;

pub use git::GitCli;
pub use local_template::LocalTemplate;
