//! Rule and RuleSet types.

use crate::error::{Error, Result};

/// One positional rewrite: once a line containing `activator` has been seen,
/// the first later line containing `target` gets that occurrence replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    activator: String,
    target: String,
    replacement: String,
}

impl Rule {
    pub fn new(
        activator: impl Into<String>,
        target: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            activator: activator.into(),
            target: target.into(),
            replacement: replacement.into(),
        }
    }

    /// Substring that opens this rule's context.
    pub fn activator(&self) -> &str {
        &self.activator
    }

    /// Substring replaced once the rule is active.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl<A, T, R> From<(A, T, R)> for Rule
where
    A: Into<String>,
    T: Into<String>,
    R: Into<String>,
{
    fn from((activator, target, replacement): (A, T, R)) -> Self {
        Self::new(activator, target, replacement)
    }
}

/// An ordered, non-empty sequence of rules.
///
/// Declaration order is evaluation order and is never changed after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting an empty list.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(Error::format("rule set must contain at least one rule", 0));
        }
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a constructed set; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
