//! Integration tests for rule sources.

use postprocess_rules::{
    Error, Rule, RuleSource, SidecarRules, StaticRules, parse_sidecar,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

const SIDECAR: &str = r#"// Retarget generated enum columns to hand-written mapping types.

// coin_store_events.ev_action
coin_store_events (id) {
    ev_action -> Text,
    ev_action -> crate::autogen::schema::EventActionMapping,

// coin_store_hist.obj_state
coin_store_hist (id) {
    obj_state -> Text,
    obj_state -> crate::autogen::schema::ObjStateMapping,
"#;

#[test]
fn test_parse_sidecar_triples_in_order() {
    let rules = parse_sidecar(SIDECAR, "//").unwrap();

    assert_eq!(
        rules.as_slice(),
        &[
            Rule::new(
                "coin_store_events (id) {",
                "ev_action -> Text,",
                "ev_action -> crate::autogen::schema::EventActionMapping,",
            ),
            Rule::new(
                "coin_store_hist (id) {",
                "obj_state -> Text,",
                "obj_state -> crate::autogen::schema::ObjStateMapping,",
            ),
        ]
    );
}

#[rstest]
#[case::empty("")]
#[case::only_blank("\n   \n\t\n")]
#[case::only_comments("// a\n  // b\n")]
fn test_no_significant_lines_is_format_error(#[case] content: &str) {
    let err = parse_sidecar(content, "//").unwrap_err();
    assert!(matches!(
        err,
        Error::Format {
            significant_lines: 0,
            ..
        }
    ));
}

#[rstest]
#[case::one("a\n", 1)]
#[case::two("a\nb\n", 2)]
#[case::four("a\nb\nc\nd\n", 4)]
#[case::five("a\nb\n// skip\nc\nd\ne\n", 5)]
fn test_non_triple_count_is_format_error(#[case] content: &str, #[case] expected: usize) {
    match parse_sidecar(content, "//") {
        Err(Error::Format {
            significant_lines, ..
        }) => assert_eq!(significant_lines, expected),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_static_rules_load_is_idempotent() {
    let source = StaticRules::new([
        ("coin_store_events (id) {", "Text", "EventActionMapping"),
        ("coin_store_hist (id) {", "Text", "ObjStateMapping"),
    ]);

    let first = source.load().unwrap();
    let second = source.load().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_static_rules_empty_is_format_error() {
    let source = StaticRules::new(Vec::<Rule>::new());
    assert!(matches!(source.load(), Err(Error::Format { .. })));
}

#[test]
fn test_sidecar_rules_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("schema.rs.replace");
    fs::write(&path, SIDECAR).unwrap();

    let rules = SidecarRules::new(path.as_path()).load().unwrap();
    assert_eq!(rules, parse_sidecar(SIDECAR, "//").unwrap());
}

#[test]
fn test_sidecar_rules_custom_marker() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rules.txt");
    fs::write(&path, "# comment\nSTART\nText\nMapping\n").unwrap();

    let rules = SidecarRules::new(path.as_path())
        .with_comment_marker("#")
        .load()
        .unwrap();
    assert_eq!(rules.as_slice(), &[Rule::new("START", "Text", "Mapping")]);
}

#[test]
fn test_sidecar_rules_missing_file() {
    let temp = TempDir::new().unwrap();
    let source = SidecarRules::new(temp.path().join("missing.replace"));

    let err = source.load().unwrap_err();
    assert!(matches!(err, Error::Fs(_)));
    assert!(err.to_string().contains("missing.replace"));
}
