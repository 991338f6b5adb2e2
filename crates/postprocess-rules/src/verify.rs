//! Completion check run after the line pass.

use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::tracker::{ActivationTracker, RuleStatus, RunReport};

/// Fail unless every rule performed its replacement.
///
/// # Errors
/// Returns `Error::Activation` naming the first unsatisfied rule in
/// declaration order, along with the total number of unsatisfied rules.
pub fn verify(tracker: &ActivationTracker) -> Result<()> {
    check(
        tracker
            .unspent()
            .map(|(index, tracked)| (index, tracked.rule(), tracked.status())),
    )
}

/// Same check as [`verify`], applied to a finished run.
pub fn verify_report(report: &RunReport) -> Result<()> {
    check(
        report
            .outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.status != RuleStatus::Spent)
            .map(|(index, outcome)| (index, &outcome.rule, outcome.status)),
    )
}

fn check<'a>(unspent: impl Iterator<Item = (usize, &'a Rule, RuleStatus)>) -> Result<()> {
    let mut first = None;
    let mut unsatisfied = 0;

    for (index, rule, status) in unspent {
        tracing::debug!(
            rule = index + 1,
            status = %status,
            activator = rule.activator(),
            "rule not applied"
        );
        unsatisfied += 1;
        first.get_or_insert((index, rule));
    }

    match first {
        None => Ok(()),
        Some((index, rule)) => Err(Error::Activation {
            index: index + 1,
            activator: rule.activator().to_string(),
            target: rule.target().to_string(),
            unsatisfied,
        }),
    }
}
