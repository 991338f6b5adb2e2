use postprocess_rules::{ActivationTracker, Rule, RuleSet, RuleStatus};
use proptest::prelude::*;

fn rule_strategy() -> impl Strategy<Value = Rule> {
    ("[ABC]", "[xyz]", "[XYZ]").prop_map(|(a, t, r)| Rule::new(a, t, r))
}

proptest! {
    #[test]
    fn test_status_never_regresses(
        rules in prop::collection::vec(rule_strategy(), 1..5),
        lines in prop::collection::vec("[ABCxyz ]{0,6}", 0..20),
    ) {
        let mut tracker = ActivationTracker::new(RuleSet::new(rules).unwrap());
        let mut previous = tracker.statuses();

        for line in &lines {
            tracker.transform(line);
            let current = tracker.statuses();
            for (before, after) in previous.iter().zip(&current) {
                prop_assert!(before <= after);
            }
            previous = current;
        }
    }

    #[test]
    fn test_at_most_one_replacement_per_line(
        rules in prop::collection::vec(rule_strategy(), 1..5),
        lines in prop::collection::vec("[ABCxyz ]{0,6}", 0..20),
    ) {
        let mut tracker = ActivationTracker::new(RuleSet::new(rules).unwrap());
        for line in &lines {
            tracker.transform(line);
        }
        let report = tracker.finish();

        let mut spent_lines: Vec<usize> = report.outcomes.iter().filter_map(|o| o.spent_at).collect();
        let total = spent_lines.len();
        spent_lines.sort_unstable();
        spent_lines.dedup();
        prop_assert_eq!(spent_lines.len(), total);

        for outcome in &report.outcomes {
            match (outcome.activated_at, outcome.spent_at) {
                (Some(activated), Some(spent)) => {
                    prop_assert!(activated < spent);
                    prop_assert_eq!(outcome.status, RuleStatus::Spent);
                }
                (None, Some(_)) => prop_assert!(false, "spent without activation"),
                (Some(_), None) => prop_assert_eq!(outcome.status, RuleStatus::Active),
                (None, None) => prop_assert_eq!(outcome.status, RuleStatus::Pending),
            }
        }
    }

    #[test]
    fn test_lines_without_patterns_pass_through(
        line in "[a-w0-9 ]{0,20}",
    ) {
        let rules = RuleSet::new(vec![Rule::new("A", "x", "X")]).unwrap();
        let mut tracker = ActivationTracker::new(rules);
        prop_assert_eq!(tracker.transform(&line), line.clone());
    }
}
