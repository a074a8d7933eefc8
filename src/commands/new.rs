//! New command - create a project from the template repository

use std::io;
use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use scaffold::application::NewProjectOptions;
use scaffold::config::Config;
use scaffold::error::ScaffoldResult;
use scaffold::presentation::{create_event_sink, create_new_project_use_case, create_renderer};
use scaffold::ui::context::UiContext;
use scaffold::ui::primitives::icon::Icon;

use super::emit_json_error;

fn build_options(
    project_name: &str,
    package: Option<&str>,
    repo: Option<&str>,
    dir: &Path,
    keep_history: bool,
    config: &Config,
) -> ScaffoldResult<NewProjectOptions> {
    let template = &config.template;
    Ok(NewProjectOptions::new(project_name)
        .with_package(package.map(str::to_string))
        .with_repository(repo.unwrap_or(&template.repository))
        .with_parent_dir(dir)
        .with_keep_history(keep_history)
        .with_tokens(&template.project_token, &template.package_token)
        .with_default_package_prefix(&template.default_package_prefix)
        .with_extra_rules(config.extra_rules()?)
        .with_substitution(config.substitution_options()?))
}

pub fn cmd_new(
    project_name: &str,
    package: Option<&str>,
    repo: Option<&str>,
    dir: &Path,
    keep_history: bool,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let result = build_options(project_name, package, repo, dir, keep_history, config)
        .and_then(|options| {
            if !ui.json && !ui.is_quiet() {
                println!(
                    "{} Fetching template {}",
                    Icon::Progress.colored(ui.color, ui.unicode),
                    options.repository
                );
            }
            info!(repository = %options.repository, "creating project");

            let events = create_event_sink(ui, "new");
            create_new_project_use_case(&options.repository).execute(&options, events.as_ref())
        });

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if ui.json {
                emit_json_error("new", &e);
            }
            return Err(e.into());
        }
    };

    if !ui.is_quiet() || ui.json || report.has_failures() {
        let renderer = create_renderer(ui.json, ui.color, ui.unicode);
        renderer.render_new_project(&report, &mut io::stdout())?;
    }

    if report.has_failures() {
        bail!(
            "project created at {} but some files could not be updated",
            report.target.display()
        );
    }
    Ok(())
}
