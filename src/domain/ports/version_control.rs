//! Version control port
//!
//! Fetching the template and resetting history are collaborators of the
//! substitution engine; the new-project flow reaches them only through this
//! trait.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Materializes template trees and reinitializes their history.
pub trait VersionControl {
    /// Materialize `repository` at `destination`, which must not exist yet.
    ///
    /// On failure `destination` must not be left behind.
    fn fetch(&self, repository: &str, destination: &Path) -> ScaffoldResult<()>;

    /// Discard existing history under `root` and start a fresh one.
    fn reinitialize(&self, root: &Path) -> ScaffoldResult<()>;
}
