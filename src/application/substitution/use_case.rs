//! Substitution Use Case
//!
//! Runs each rule's content pass followed by its path pass.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::ports::{FileSystem, SubstitutionEventSink};
use crate::domain::services::{ContentReplacer, NameReplacer, PackageMover};
use crate::domain::value_objects::{RuleSet, SubstitutionRule};
use crate::error::{ScaffoldError, ScaffoldResult};

use super::options::SubstitutionOptions;
use super::result::{PathOutcome, RuleOutcome, SubstitutionReport};

/// Substitution use case - applies a rule set to a tree in place
pub struct SubstitutionUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> SubstitutionUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new substitution use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Apply `rules` to the tree at `root`, in order.
    ///
    /// Fails only on preconditions (missing root, malformed rule). Per-file
    /// problems are reported through `events` and counted in the report.
    pub fn execute(
        &self,
        root: &Path,
        rules: &RuleSet,
        options: &SubstitutionOptions,
        events: &dyn SubstitutionEventSink,
    ) -> ScaffoldResult<SubstitutionReport> {
        if !self.fs.is_dir(root) {
            return Err(ScaffoldError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        for rule in rules {
            rule.validate()?;
        }

        let mut report = SubstitutionReport::new();
        for rule in rules {
            report.outcomes.push(self.apply_rule(root, rule, options, events)?);
        }

        for rule in report.noop_rules() {
            warn!(rule = %rule, "rule matched nothing");
        }
        info!(
            rules = report.outcomes.len(),
            modified = report.content_modified(),
            renamed = report.entries_renamed(),
            moved = report.entries_moved(),
            "substitution finished"
        );

        Ok(report)
    }

    fn apply_rule(
        &self,
        root: &Path,
        rule: &SubstitutionRule,
        options: &SubstitutionOptions,
        events: &dyn SubstitutionEventSink,
    ) -> ScaffoldResult<RuleOutcome> {
        info!(rule = %rule, "applying rule");

        let content = ContentReplacer::new(&self.fs, &options.extensions, &options.excludes)
            .replace(root, rule.old(), rule.new_value(), events);

        let paths = if rule.is_structural() {
            let (old, new) = rule.namespaces().ok_or_else(|| ScaffoldError::InvalidRule {
                rule: rule.to_string(),
                message: "structural rule needs dotted namespaces".to_string(),
            })?;
            PathOutcome::Moved(
                PackageMover::new(&self.fs, &options.source_roots, &options.excludes)
                    .relocate(root, &old, &new, events),
            )
        } else {
            PathOutcome::Renamed(
                NameReplacer::new(&self.fs, &options.excludes).replace(
                    root,
                    rule.old(),
                    rule.new_value(),
                    events,
                ),
            )
        };

        Ok(RuleOutcome {
            rule: rule.clone(),
            content,
            paths,
        })
    }
}
