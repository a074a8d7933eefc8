//! Substitution result types

use crate::domain::services::{ContentReport, MoveReport, RenameReport};
use crate::domain::value_objects::SubstitutionRule;

/// What happened to paths for one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Plain rule: names were rewritten
    Renamed(RenameReport),
    /// Structural rule: package directories were relocated
    Moved(MoveReport),
}

impl PathOutcome {
    pub fn has_failures(&self) -> bool {
        match self {
            PathOutcome::Renamed(report) => report.has_failures(),
            PathOutcome::Moved(report) => report.has_failures(),
        }
    }
}

/// Outcome of applying a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: SubstitutionRule,
    pub content: ContentReport,
    pub paths: PathOutcome,
}

impl RuleOutcome {
    /// Nothing in the tree matched this rule
    ///
    /// Usually a sign of a misspelled token.
    pub fn is_noop(&self) -> bool {
        let paths_untouched = match &self.paths {
            PathOutcome::Renamed(report) => report.renamed == 0,
            PathOutcome::Moved(report) => report.moved == 0,
        };
        self.content.modified == 0 && paths_untouched
    }

    pub fn has_failures(&self) -> bool {
        self.content.has_failures() || self.paths.has_failures()
    }
}

/// Result of a whole substitution run, one outcome per rule in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub outcomes: Vec<RuleOutcome>,
}

impl SubstitutionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files rewritten across all rules
    pub fn content_modified(&self) -> usize {
        self.outcomes.iter().map(|o| o.content.modified).sum()
    }

    /// Allowed files examined across all rules
    pub fn files_examined(&self) -> usize {
        self.outcomes.iter().map(|o| o.content.examined).sum()
    }

    pub fn content_failures(&self) -> usize {
        self.outcomes.iter().map(|o| o.content.failed.len()).sum()
    }

    pub fn entries_renamed(&self) -> usize {
        self.renames().map(|r| r.renamed).sum()
    }

    pub fn rename_failures(&self) -> usize {
        self.renames().map(|r| r.failed.len()).sum()
    }

    pub fn entries_moved(&self) -> usize {
        self.moves().map(|m| m.moved).sum()
    }

    pub fn move_failures(&self) -> usize {
        self.moves().map(|m| m.failed.len()).sum()
    }

    pub fn collisions(&self) -> usize {
        self.moves().map(|m| m.collisions).sum()
    }

    /// Any file or entry failed under any rule
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(RuleOutcome::has_failures)
    }

    /// Rules that matched nothing at all
    pub fn noop_rules(&self) -> impl Iterator<Item = &SubstitutionRule> {
        self.outcomes.iter().filter(|o| o.is_noop()).map(|o| &o.rule)
    }

    fn renames(&self) -> impl Iterator<Item = &RenameReport> {
        self.outcomes.iter().filter_map(|o| match &o.paths {
            PathOutcome::Renamed(report) => Some(report),
            PathOutcome::Moved(_) => None,
        })
    }

    fn moves(&self) -> impl Iterator<Item = &MoveReport> {
        self.outcomes.iter().filter_map(|o| match &o.paths {
            PathOutcome::Moved(report) => Some(report),
            PathOutcome::Renamed(_) => None,
        })
    }
}
