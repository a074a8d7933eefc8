//! Substitution rules
//!
//! A rule is a literal `old → new` token pair. Structural rules additionally
//! describe dotted namespaces whose directory layout has to follow the rename.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScaffoldError, ScaffoldResult};

use super::namespace::Namespace;
use super::project_names::ProjectNames;

/// One literal token substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    old: String,
    new: String,
    #[serde(default)]
    structural: bool,
}

impl SubstitutionRule {
    /// Plain rule: content plus file/directory names.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> ScaffoldResult<Self> {
        let rule = Self {
            old: old.into(),
            new: new.into(),
            structural: false,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Structural rule: content plus package directory relocation.
    pub fn structural(old: impl Into<String>, new: impl Into<String>) -> ScaffoldResult<Self> {
        let rule = Self {
            old: old.into(),
            new: new.into(),
            structural: true,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check token invariants. Deserialized rules must be validated before use.
    pub fn validate(&self) -> ScaffoldResult<()> {
        if self.old.is_empty() {
            return Err(self.invalid("old token is empty"));
        }
        if self.new.is_empty() {
            return Err(self.invalid("new token is empty"));
        }
        if self.structural {
            Namespace::parse(&self.old)?;
            Namespace::parse(&self.new)?;
        }
        Ok(())
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_value(&self) -> &str {
        &self.new
    }

    pub fn is_structural(&self) -> bool {
        self.structural
    }

    /// Namespaces for a structural rule, `None` for plain rules.
    pub fn namespaces(&self) -> Option<(Namespace, Namespace)> {
        if !self.structural {
            return None;
        }
        let old = Namespace::parse(&self.old).ok()?;
        let new = Namespace::parse(&self.new).ok()?;
        Some((old, new))
    }

    fn invalid(&self, message: &str) -> ScaffoldError {
        ScaffoldError::InvalidRule {
            rule: format!("{}={}", self.old, self.new),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.structural { "=>" } else { "->" };
        write!(f, "'{}' {} '{}'", self.old, arrow, self.new)
    }
}

/// Parse an `OLD=NEW` command-line argument.
///
/// Splits on the first `=`, so the new token may itself contain `=`.
pub fn parse_rule_arg(raw: &str, structural: bool) -> ScaffoldResult<SubstitutionRule> {
    let Some((old, new)) = raw.split_once('=') else {
        return Err(ScaffoldError::InvalidRule {
            rule: raw.to_string(),
            message: "expected OLD=NEW".to_string(),
        });
    };

    if structural {
        SubstitutionRule::structural(old, new)
    } else {
        SubstitutionRule::new(old, new)
    }
}

/// Ordered, immutable list of rules.
///
/// Later rules see the tree as left by earlier ones, so order matters when a
/// rule's new token contains another rule's old token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    /// Standard rules for a new project: the project-name token, then the
    /// package token, then any configured extras.
    pub fn for_project(
        names: &ProjectNames,
        project_token: &str,
        package_token: &str,
        extra: &[SubstitutionRule],
    ) -> ScaffoldResult<Self> {
        let mut rules = vec![
            SubstitutionRule::new(project_token, names.capitalized())?,
            SubstitutionRule::structural(package_token, names.package().to_string())?,
        ];
        for rule in extra {
            rule.validate()?;
            rules.push(rule.clone());
        }
        Ok(Self { rules })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubstitutionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a SubstitutionRule;
    type IntoIter = std::slice::Iter<'a, SubstitutionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
