//! Ignore rule model
//!
//! An ignore rule is one gitignore-style pattern together with the directory
//! it was declared in and whether it re-includes (`!pattern`) instead of
//! excluding.

use std::path::{Path, PathBuf};

/// A single ignore pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// The pattern, without any leading `!`
    pub pattern: String,

    /// Whether this rule re-includes paths matched by earlier rules
    pub negated: bool,

    /// Directory the rule was declared in
    pub scope: PathBuf,
}

impl IgnoreRule {
    /// Parse one rule file line.
    ///
    /// Returns `None` for blank lines and comments.
    #[must_use]
    pub fn parse(line: &str, scope: &Path) -> Option<Self> {
        let line = line.trim_end_matches('\r');
        if is_blank_or_comment(line) {
            return None;
        }

        let (negated, pattern) = line.strip_prefix('!').map_or((false, line), |rest| (true, rest));

        Some(Self {
            pattern: pattern.to_string(),
            negated,
            scope: scope.to_path_buf(),
        })
    }

    /// The rule as a gitignore line
    #[must_use]
    pub fn line(&self) -> String {
        if self.negated {
            format!("!{}", self.pattern)
        } else {
            self.pattern.clone()
        }
    }
}

/// True for lines that carry no pattern: blank lines and `#` comments
#[must_use]
pub fn is_blank_or_comment(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Ordered collection of ignore rules
///
/// Rules are applied in insertion order, so a re-inclusion must come after
/// the exclusion it negates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRuleSet {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRuleSet {
    /// Create an empty rule set
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule
    pub fn push(&mut self, rule: IgnoreRule) {
        self.rules.push(rule);
    }
}

impl<'a> IntoIterator for &'a IgnoreRuleSet {
    type Item = &'a IgnoreRule;
    type IntoIter = std::slice::Iter<'a, IgnoreRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
