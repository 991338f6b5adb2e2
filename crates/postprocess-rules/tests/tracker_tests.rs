//! Integration tests for rule activation and replacement.

use postprocess_rules::{ActivationTracker, Error, Rule, RuleSet, RuleStatus, rewrite, verify};
use pretty_assertions::assert_eq;

fn tracker(rules: &[(&str, &str, &str)]) -> ActivationTracker {
    let set = RuleSet::new(rules.iter().map(|&r| Rule::from(r)).collect()).unwrap();
    ActivationTracker::new(set)
}

fn run_lines(tracker: &mut ActivationTracker, lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| tracker.transform(line)).collect()
}

#[test]
fn test_end_to_end_scenario() {
    let mut t = tracker(&[("START", "Text", "Mapping")]);
    let generated = "noise\nSTART here\nvalue: Text\nText again\n";

    let output = rewrite("// prologue\n", generated, &mut t);

    assert_eq!(
        output,
        "// prologue\n\n\nnoise\nSTART here\nvalue: Mapping\nText again\n"
    );
    assert!(verify(&t).is_ok());
}

#[test]
fn test_exactly_once_replacement() {
    let mut t = tracker(&[("table!", "-> Text", "-> EventActionMapping")]);
    let out = run_lines(
        &mut t,
        &[
            "ev_action -> Text,\n",
            "diesel::table! {\n",
            "    id -> Integer,\n",
            "    ev_action -> Text,\n",
            "    ev_desc -> Text,\n",
        ],
    );

    assert_eq!(
        out,
        [
            "ev_action -> Text,\n",
            "diesel::table! {\n",
            "    id -> Integer,\n",
            "    ev_action -> EventActionMapping,\n",
            "    ev_desc -> Text,\n",
        ]
    );
}

#[test]
fn test_multiple_rules_activate_on_same_line() {
    let mut t = tracker(&[("both", "x", "X"), ("both", "y", "Y")]);

    t.transform("both here\n");
    assert_eq!(t.statuses(), [RuleStatus::Active, RuleStatus::Active]);

    assert_eq!(t.transform("y\n"), "Y\n");
    assert_eq!(t.transform("x\n"), "X\n");
    assert!(t.is_complete());
}

#[test]
fn test_replacement_is_exclusive_per_line() {
    let mut t = tracker(&[("A", "x", "X"), ("B", "y", "Y")]);
    t.transform("A B\n");

    assert_eq!(t.transform("x y\n"), "X y\n");
    assert_eq!(t.statuses(), [RuleStatus::Spent, RuleStatus::Active]);

    assert_eq!(t.transform("x y\n"), "x Y\n");
    assert!(t.is_complete());
}

#[test]
fn test_replacement_stops_activation_scan() {
    // Rule 1 replaces on this line, so rule 2 is never visited for activation.
    let mut t = tracker(&[("A", "x", "X"), ("B", "y", "Y")]);
    t.transform("A\n");

    assert_eq!(t.transform("x B\n"), "X B\n");
    assert_eq!(t.statuses(), [RuleStatus::Spent, RuleStatus::Pending]);
}

#[test]
fn test_earlier_active_rule_takes_precedence() {
    // Both rules target the same text; declaration order decides.
    let mut t = tracker(&[("A", "Text", "First"), ("B", "Text", "Second")]);
    let out = run_lines(&mut t, &["A B\n", "Text\n", "Text\n", "Text\n"]);

    assert_eq!(out, ["A B\n", "First\n", "Second\n", "Text\n"]);
}

#[test]
fn test_missing_activator_is_an_activation_error() {
    let mut t = tracker(&[("START", "Text", "Mapping"), ("NEVER", "Text", "Other")]);
    run_lines(&mut t, &["START\n", "Text\n", "Text\n"]);

    match verify(&t) {
        Err(Error::Activation {
            index,
            activator,
            target,
            ..
        }) => {
            assert_eq!(index, 2);
            assert_eq!(activator, "NEVER");
            assert_eq!(target, "Text");
        }
        other => panic!("expected activation error, got {:?}", other),
    }
}

#[test]
fn test_missing_target_is_an_activation_error() {
    let mut t = tracker(&[("START", "Text", "Mapping")]);
    run_lines(&mut t, &["START\n", "Integer\n"]);

    assert_eq!(t.statuses(), [RuleStatus::Active]);
    let err = verify(&t).unwrap_err();
    assert!(err.to_string().contains("\"START\" \"Text\""), "{}", err);
}

#[test]
fn test_report_records_lines() {
    let mut t = tracker(&[("A", "x", "X"), ("B", "y", "Y")]);
    run_lines(&mut t, &["A\n", "B\n", "x\n", "y\n", "z\n"]);

    let report = t.finish();
    assert_eq!(report.lines_scanned, 5);
    assert_eq!(report.spent_count(), 2);
    assert_eq!(report.outcomes[0].activated_at, Some(1));
    assert_eq!(report.outcomes[0].spent_at, Some(3));
    assert_eq!(report.outcomes[1].activated_at, Some(2));
    assert_eq!(report.outcomes[1].spent_at, Some(4));
}
