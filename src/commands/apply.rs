//! Apply command - run substitution rules over an existing tree

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use scaffold::config::{split_list, Config};
use scaffold::domain::value_objects::{
    parse_rule_arg, ExtensionAllowlist, RuleSet, SourceRoots, SubstitutionRule,
};
use scaffold::error::ScaffoldResult;
use scaffold::presentation::{create_event_sink, create_renderer, create_substitution_use_case};
use scaffold::ui::context::UiContext;

use super::emit_json_error;

/// Rules in run order: `--rule` values, `--package-rule` values, then
/// configured extra rules.
fn collect_rules(
    rules: &[String],
    package_rules: &[String],
    config: &Config,
) -> ScaffoldResult<RuleSet> {
    let mut ordered: Vec<SubstitutionRule> = Vec::new();
    for raw in rules {
        ordered.push(parse_rule_arg(raw, false)?);
    }
    for raw in package_rules {
        ordered.push(parse_rule_arg(raw, true)?);
    }
    ordered.extend(config.extra_rules()?);
    Ok(RuleSet::new(ordered))
}

pub fn cmd_apply(
    root: &Path,
    rules: &[String],
    package_rules: &[String],
    extensions: Option<&str>,
    source_roots: Option<&str>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let prepared = collect_rules(rules, package_rules, config).and_then(|rule_set| {
        let mut options = config.substitution_options()?;
        if let Some(list) = extensions {
            options = options.with_extensions(ExtensionAllowlist::new(split_list(list)));
        }
        if let Some(list) = source_roots {
            options = options.with_source_roots(SourceRoots::new(split_list(list)));
        }
        Ok((rule_set, options))
    });
    let (rule_set, options) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            if ui.json {
                emit_json_error("apply", &e);
            }
            return Err(e).context("invalid substitution rules");
        }
    };

    if rule_set.is_empty() {
        bail!("no rules given; pass --rule OLD=NEW or --package-rule OLD=NEW");
    }

    let events = create_event_sink(ui, "apply");
    let use_case = create_substitution_use_case();
    let report = match use_case.execute(root, &rule_set, &options, events.as_ref()) {
        Ok(report) => report,
        Err(e) => {
            if ui.json {
                emit_json_error("apply", &e);
            }
            return Err(e.into());
        }
    };

    if !ui.is_quiet() || ui.json || report.has_failures() {
        let renderer = create_renderer(ui.json, ui.color, ui.unicode);
        renderer.render_substitution(&report, root, &mut io::stdout())?;
    }

    if report.has_failures() {
        bail!(
            "{} files and {} entries could not be updated",
            report.content_failures(),
            report.rename_failures() + report.move_failures()
        );
    }
    Ok(())
}
