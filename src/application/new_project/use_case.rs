//! New Project Use Case
//!
//! Orchestrates the new-project flow around the substitution engine.

use tracing::info;

use crate::application::substitution::SubstitutionUseCase;
use crate::domain::ports::{FileSystem, SubstitutionEventSink, VersionControl};
use crate::domain::value_objects::{ProjectNames, RuleSet};
use crate::error::{ScaffoldError, ScaffoldResult};

use super::options::NewProjectOptions;
use super::result::NewProjectReport;

/// New project use case - template in, renamed project out
pub struct NewProjectUseCase<FS, VC>
where
    FS: FileSystem,
    VC: VersionControl,
{
    fs: FS,
    vcs: VC,
}

impl<FS, VC> NewProjectUseCase<FS, VC>
where
    FS: FileSystem,
    VC: VersionControl,
{
    /// Create a new project use case
    pub fn new(fs: FS, vcs: VC) -> Self {
        Self { fs, vcs }
    }

    /// Create the project described by `options`.
    ///
    /// Nothing is fetched when names or rules are invalid or the target
    /// directory already exists.
    pub fn execute(
        &self,
        options: &NewProjectOptions,
        events: &dyn SubstitutionEventSink,
    ) -> ScaffoldResult<NewProjectReport> {
        let names = ProjectNames::derive(
            &options.project_name,
            options.package.as_deref(),
            &options.default_package_prefix,
        )?;
        let rules = RuleSet::for_project(
            &names,
            &options.project_token,
            &options.package_token,
            &options.extra_rules,
        )?;

        let target = options.parent_dir.join(names.directory());
        if self.fs.exists(&target) {
            return Err(ScaffoldError::TargetExists { path: target });
        }

        info!(
            repository = %options.repository,
            target = %target.display(),
            "fetching template"
        );
        self.vcs.fetch(&options.repository, &target)?;

        let substitution = SubstitutionUseCase::new(&self.fs).execute(
            &target,
            &rules,
            &options.substitution,
            events,
        )?;

        let history_reset = !options.keep_history;
        if history_reset {
            self.vcs.reinitialize(&target)?;
        }

        info!(
            project = names.capitalized(),
            package = %names.package(),
            target = %target.display(),
            "project created"
        );

        Ok(NewProjectReport {
            names,
            target,
            substitution,
            history_reset,
        })
    }
}
