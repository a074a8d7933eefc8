//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{NewProjectUseCase, SubstitutionUseCase};
use crate::domain::ports::{SubstitutionEventSink, VersionControl};
use crate::error::ScaffoldResult;
use crate::infrastructure::{ConsoleEventSink, GitCli, JsonEventSink, LocalFs, LocalTemplate};
use crate::ui::context::UiContext;

/// Type alias for the concrete SubstitutionUseCase
pub type ConcreteSubstitutionUseCase = SubstitutionUseCase<LocalFs>;

/// Type alias for the concrete NewProjectUseCase
pub type ConcreteNewProjectUseCase = NewProjectUseCase<LocalFs, TemplateSource>;

/// Where a template comes from
///
/// A repository argument naming an existing directory that is not a git
/// checkout is copied; everything else goes through git.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Git(GitCli),
    Local(LocalTemplate),
}

impl TemplateSource {
    pub fn for_repository(repository: &str) -> Self {
        let path = Path::new(repository);
        if path.is_dir() && !path.join(".git").exists() {
            TemplateSource::Local(LocalTemplate::new())
        } else {
            TemplateSource::Git(GitCli::default())
        }
    }
}

impl VersionControl for TemplateSource {
    fn fetch(&self, repository: &str, destination: &Path) -> ScaffoldResult<()> {
        match self {
            TemplateSource::Git(git) => git.fetch(repository, destination),
            TemplateSource::Local(local) => local.fetch(repository, destination),
        }
    }

    fn reinitialize(&self, root: &Path) -> ScaffoldResult<()> {
        match self {
            TemplateSource::Git(git) => git.reinitialize(root),
            TemplateSource::Local(local) => local.reinitialize(root),
        }
    }
}

/// Create a substitution use case over the local file system
pub fn create_substitution_use_case() -> ConcreteSubstitutionUseCase {
    SubstitutionUseCase::new(LocalFs::new())
}

/// Create a new-project use case able to fetch `repository`
pub fn create_new_project_use_case(repository: &str) -> ConcreteNewProjectUseCase {
    NewProjectUseCase::new(LocalFs::new(), TemplateSource::for_repository(repository))
}

/// Event sink matching the output mode
pub fn create_event_sink(ui: &UiContext, command: &'static str) -> Box<dyn SubstitutionEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        Box::new(ConsoleEventSink::stdout(
            ui.color,
            ui.unicode,
            ui.show_details(),
        ))
    }
}
