//! Activation tracking for positional rules.
//!
//! Each rule moves through `Pending -> Active -> Spent` and never back. A line
//! may activate any number of rules, but at most one rule may perform its
//! replacement on a given line.

use crate::rule::{Rule, RuleSet};

/// Where a rule is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleStatus {
    /// Activator not seen yet.
    Pending,
    /// Activator seen, target not replaced yet.
    Active,
    /// Replacement applied.
    Spent,
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleStatus::Pending => write!(f, "pending"),
            RuleStatus::Active => write!(f, "active"),
            RuleStatus::Spent => write!(f, "spent"),
        }
    }
}

/// A rule together with its activation flags for one run.
#[derive(Debug, Clone)]
pub struct TrackedRule {
    rule: Rule,
    active: bool,
    spent: bool,
    activated_at: Option<usize>,
    spent_at: Option<usize>,
}

impl TrackedRule {
    fn new(rule: Rule) -> Self {
        Self {
            rule,
            active: false,
            spent: false,
            activated_at: None,
            spent_at: None,
        }
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    pub fn status(&self) -> RuleStatus {
        match (self.active, self.spent) {
            (_, true) => RuleStatus::Spent,
            (true, false) => RuleStatus::Active,
            (false, false) => RuleStatus::Pending,
        }
    }

    /// 1-based line on which the activator was seen.
    pub fn activated_at(&self) -> Option<usize> {
        self.activated_at
    }

    /// 1-based line on which the replacement was applied.
    pub fn spent_at(&self) -> Option<usize> {
        self.spent_at
    }
}

/// Final state of one rule after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub status: RuleStatus,
    pub activated_at: Option<usize>,
    pub spent_at: Option<usize>,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub lines_scanned: usize,
    pub outcomes: Vec<RuleOutcome>,
}

impl RunReport {
    /// True when every rule performed its replacement.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.status == RuleStatus::Spent)
    }

    pub fn spent_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == RuleStatus::Spent)
            .count()
    }
}

/// Owns the per-rule flags for a single postprocessing run.
#[derive(Debug, Clone)]
pub struct ActivationTracker {
    rules: Vec<TrackedRule>,
    line_no: usize,
}

impl ActivationTracker {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: rules.into_iter().map(TrackedRule::new).collect(),
            line_no: 0,
        }
    }

    /// Rewrite one line, updating rule state.
    ///
    /// Rules are visited in declaration order, skipping spent ones. An active
    /// rule whose target occurs in the line replaces the first occurrence and
    /// ends processing of the line. A pending rule whose activator occurs in
    /// the line becomes active and the scan continues with the next rule.
    pub fn transform(&mut self, line: &str) -> String {
        self.line_no += 1;
        let line_no = self.line_no;

        for (index, tracked) in self.rules.iter_mut().enumerate() {
            if tracked.spent {
                continue;
            }

            if tracked.active {
                if line.contains(tracked.rule.target()) {
                    tracked.spent = true;
                    tracked.spent_at = Some(line_no);
                    tracing::debug!(
                        rule = index + 1,
                        line = line_no,
                        pattern = tracked.rule.target(),
                        "applied replacement"
                    );
                    return line.replacen(tracked.rule.target(), tracked.rule.replacement(), 1);
                }
            } else if line.contains(tracked.rule.activator()) {
                tracked.active = true;
                tracked.activated_at = Some(line_no);
                tracing::debug!(
                    rule = index + 1,
                    line = line_no,
                    activator = tracked.rule.activator(),
                    "activated rule"
                );
            }
        }

        line.to_string()
    }

    /// Number of lines passed through `transform` so far.
    pub fn lines_scanned(&self) -> usize {
        self.line_no
    }

    pub fn rules(&self) -> &[TrackedRule] {
        &self.rules
    }

    pub fn statuses(&self) -> Vec<RuleStatus> {
        self.rules.iter().map(TrackedRule::status).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.rules.iter().all(TrackedRule::is_spent)
    }

    /// Rules that have not performed their replacement, with 0-based indices.
    pub fn unspent(&self) -> impl Iterator<Item = (usize, &TrackedRule)> {
        self.rules.iter().enumerate().filter(|(_, t)| !t.spent)
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            lines_scanned: self.line_no,
            outcomes: self
                .rules
                .into_iter()
                .map(|t| RuleOutcome {
                    status: t.status(),
                    activated_at: t.activated_at,
                    spent_at: t.spent_at,
                    rule: t.rule,
                })
                .collect(),
        }
    }
}
