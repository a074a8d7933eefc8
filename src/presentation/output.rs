//! Output Rendering
//!
//! Summaries printed after a command finishes. Per-file lines are the event
//! sink's job; these renderers only print totals and the per-rule blocks.

use std::io::{self, Write};
use std::path::Path;

use serde_json::json;

use crate::application::{NewProjectReport, PathOutcome, RuleOutcome, SubstitutionReport};
use crate::ui::primitives::icon::Icon;

/// Trait for rendering command results
pub trait ReportRenderer {
    /// Render the result of `apply`
    fn render_substitution(
        &self,
        report: &SubstitutionReport,
        root: &Path,
        out: &mut dyn Write,
    ) -> io::Result<()>;

    /// Render the result of `new`
    fn render_new_project(&self, report: &NewProjectReport, out: &mut dyn Write)
        -> io::Result<()>;
}

/// Text renderer for command results
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn write_rules(&self, report: &SubstitutionReport, out: &mut dyn Write) -> io::Result<()> {
        for outcome in &report.outcomes {
            writeln!(out)?;
            self.write_rule(outcome, out)?;
        }

        let noops: Vec<_> = report.noop_rules().collect();
        if !noops.is_empty() {
            writeln!(out)?;
            writeln!(out, "  Warnings ({}):", noops.len())?;
            for rule in noops {
                writeln!(out, "    {} {} matched nothing", self.icon(Icon::Warning), rule)?;
            }
        }

        Ok(())
    }

    fn write_rule(&self, outcome: &RuleOutcome, out: &mut dyn Write) -> io::Result<()> {
        let icon = if outcome.has_failures() {
            Icon::Error
        } else {
            Icon::Success
        };
        writeln!(out, "  {} {}", self.icon(icon), outcome.rule)?;

        let rewritten = format!("{} files rewritten", outcome.content.modified);
        let mut failed = outcome.content.failed.clone();
        match &outcome.paths {
            PathOutcome::Renamed(renamed) => {
                writeln!(out, "    {}, {} entries renamed", rewritten, renamed.renamed)?;
                failed.extend(renamed.failed.iter().cloned());
            }
            PathOutcome::Moved(moved) => {
                writeln!(
                    out,
                    "    {}, {} entries moved across {} source roots",
                    rewritten, moved.moved, moved.source_roots
                )?;
                if moved.collisions > 0 {
                    writeln!(
                        out,
                        "    {} {} collisions merged",
                        self.icon(Icon::Warning),
                        moved.collisions
                    )?;
                }
                failed.extend(moved.failed.iter().cloned());
            }
        }

        for path in failed {
            writeln!(out, "    {} {}", self.icon(Icon::Error), path.display())?;
        }
        Ok(())
    }
}

impl ReportRenderer for TextRenderer {
    fn render_substitution(
        &self,
        report: &SubstitutionReport,
        root: &Path,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if report.has_failures() {
            writeln!(out, "{} Substitution Finished With Failures", self.icon(Icon::Error))?;
        } else {
            writeln!(out, "{} Substitution Complete", self.icon(Icon::Success))?;
        }

        writeln!(out)?;
        writeln!(out, "  Root: {}", root.display())?;
        writeln!(
            out,
            "  {} rules, {} files examined",
            report.outcomes.len(),
            report.files_examined()
        )?;

        self.write_rules(report, out)
    }

    fn render_new_project(
        &self,
        report: &NewProjectReport,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if report.has_failures() {
            writeln!(
                out,
                "{} Created {} With Failures",
                self.icon(Icon::Error),
                report.names.capitalized()
            )?;
        } else {
            writeln!(
                out,
                "{} Created {}",
                self.icon(Icon::Success),
                report.names.capitalized()
            )?;
        }

        writeln!(out)?;
        writeln!(out, "  Directory: {}", report.target.display())?;
        writeln!(out, "  Package: {}", report.names.package())?;
        let history = if report.history_reset {
            "fresh repository"
        } else {
            "template history kept"
        };
        writeln!(out, "  History: {}", history)?;

        self.write_rules(&report.substitution, out)
    }
}

/// JSON renderer: one final NDJSON line after the event stream
pub struct JsonRenderer;

fn summary_json(report: &SubstitutionReport) -> serde_json::Value {
    json!({
        "rules": report.outcomes.iter().map(rule_json).collect::<Vec<_>>(),
        "files_examined": report.files_examined(),
        "content_modified": report.content_modified(),
        "content_failures": report.content_failures(),
        "entries_renamed": report.entries_renamed(),
        "rename_failures": report.rename_failures(),
        "entries_moved": report.entries_moved(),
        "move_failures": report.move_failures(),
        "collisions": report.collisions(),
    })
}

fn rule_json(outcome: &RuleOutcome) -> serde_json::Value {
    let (kind, changed, failed) = match &outcome.paths {
        PathOutcome::Renamed(r) => ("plain", r.renamed, r.failed.len()),
        PathOutcome::Moved(m) => ("structural", m.moved, m.failed.len()),
    };
    json!({
        "old": outcome.rule.old(),
        "new": outcome.rule.new_value(),
        "kind": kind,
        "content_modified": outcome.content.modified,
        "content_failed": outcome.content.failed.len(),
        "paths_changed": changed,
        "paths_failed": failed,
        "noop": outcome.is_noop(),
    })
}

fn write_line(out: &mut dyn Write, value: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    writeln!(out, "{}", line)
}

impl ReportRenderer for JsonRenderer {
    fn render_substitution(
        &self,
        report: &SubstitutionReport,
        root: &Path,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let value = json!({
            "event": "complete",
            "command": "apply",
            "success": !report.has_failures(),
            "root": root.display().to_string(),
            "summary": summary_json(report),
        });
        write_line(out, &value)
    }

    fn render_new_project(
        &self,
        report: &NewProjectReport,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let value = json!({
            "event": "complete",
            "command": "new",
            "success": !report.has_failures(),
            "project": report.names.capitalized(),
            "directory": report.target.display().to_string(),
            "package": report.names.package().to_string(),
            "history_reset": report.history_reset,
            "summary": summary_json(&report.substitution),
        });
        write_line(out, &value)
    }
}

/// Create a renderer based on output mode
pub fn create_renderer(json: bool, color: bool, unicode: bool) -> Box<dyn ReportRenderer> {
    if json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer { color, unicode })
    }
}
