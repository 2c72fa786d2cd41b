//! Parsing and validation tests against the on-disk JSON shape.

use crate::{ActionKind, ActionTree, Entry, Error, ValidationIssue, load_from_str, validate};

/// A small but realistic config: leaves at the root plus a nested group.
const SAMPLE: &str = r#"{
    "type": "group",
    "actions": [
        { "key": "t", "type": "application", "value": "/Applications/Terminal.app" },
        {
            "key": "o",
            "type": "group",
            "label": "Open",
            "actions": [
                { "key": "g", "type": "url", "value": "https://github.com" },
                { "key": "d", "type": "folder", "value": "/Users/me/Downloads" },
                { "key": "b", "type": "command", "value": "open -b com.apple.Safari" }
            ]
        }
    ]
}"#;

#[test]
fn parses_groups_and_leaves() {
    let tree = load_from_str(SAMPLE).unwrap();
    assert_eq!(tree.root().len(), 2);

    match &tree.root()[0] {
        Entry::Act(a) => {
            assert_eq!(a.key, 't');
            assert_eq!(a.kind, ActionKind::Application);
            assert_eq!(a.value, "/Applications/Terminal.app");
        }
        other => panic!("expected leaf, got {:?}", other),
    }

    match &tree.root()[1] {
        Entry::Group(g) => {
            assert_eq!(g.key, 'o');
            assert_eq!(g.label, "Open");
            assert_eq!(g.actions.len(), 3);
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn path_resolution() {
    let tree = load_from_str(SAMPLE).unwrap();

    // Empty path is the root list.
    assert_eq!(tree.entries_at(&[]).unwrap().len(), 2);
    // Into the 'o' group.
    assert_eq!(tree.entries_at(&[1]).unwrap().len(), 3);
    assert_eq!(tree.group_at(&[1]).unwrap().key, 'o');
    // Through a leaf is invalid.
    assert!(tree.entries_at(&[0]).is_none());
    assert!(tree.group_at(&[0]).is_none());
    // The root is not a keyed group.
    assert!(tree.group_at(&[]).is_none());

    let (idx, entry) = tree.lookup(&[1], 'd').unwrap();
    assert_eq!(idx, 1);
    assert_eq!(entry.key(), 'd');
    assert!(tree.lookup(&[1], 'z').is_none());
}

#[test]
fn unknown_action_kind_is_preserved() {
    let tree = load_from_str(
        r#"{ "actions": [ { "key": "r", "type": "raycast", "value": "raycast://foo" } ] }"#,
    )
    .unwrap();
    match &tree.root()[0] {
        Entry::Act(a) => assert_eq!(a.kind, ActionKind::Unknown),
        other => panic!("expected leaf, got {:?}", other),
    }
}

#[test]
fn keys_are_case_sensitive_values() {
    let tree = load_from_str(
        r#"{ "actions": [
            { "key": "a", "type": "url", "value": "https://a.example" },
            { "key": "A", "type": "url", "value": "https://shift-a.example" }
        ] }"#,
    )
    .unwrap();
    assert_eq!(tree.lookup(&[], 'a').unwrap().0, 0);
    assert_eq!(tree.lookup(&[], 'A').unwrap().0, 1);
    assert!(validate(&tree).is_empty());
}

#[test]
fn duplicate_sibling_keys_are_reported_not_fixed() {
    let tree = load_from_str(
        r#"{ "actions": [
            { "key": "x", "type": "url", "value": "https://first.example" },
            { "key": "x", "type": "url", "value": "https://second.example" }
        ] }"#,
    )
    .unwrap();
    let issues = validate(&tree);
    assert_eq!(
        issues,
        vec![ValidationIssue::DuplicateSiblingKey {
            group: "root".to_string(),
            key: 'x',
        }]
    );
    // First match wins at lookup time.
    match tree.lookup(&[], 'x').unwrap().1 {
        Entry::Act(a) => assert_eq!(a.value, "https://first.example"),
        other => panic!("expected leaf, got {:?}", other),
    }
}

#[test]
fn help_key_binding_is_flagged() {
    let tree = load_from_str(
        r#"{ "actions": [
            { "key": "g", "type": "group", "actions": [
                { "key": "?", "type": "url", "value": "https://help.example" }
            ] }
        ] }"#,
    )
    .unwrap();
    let issues = validate(&tree);
    assert_eq!(
        issues,
        vec![ValidationIssue::ShadowedHelpKey {
            group: "root > g".to_string(),
        }]
    );
}

#[test]
fn parse_errors_carry_location() {
    let err = load_from_str("{ \"actions\": [ { } ] }").unwrap_err();
    match err {
        Error::Parse { line, col, .. } => {
            assert!(line >= 1);
            assert!(col >= 1);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    // Multi-character keys are structural violations, rejected at load.
    assert!(matches!(
        load_from_str(r#"{ "actions": [ { "key": "ab", "type": "url", "value": "x" } ] }"#),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = crate::load_from_path(std::path::Path::new("/nonexistent/config.json")).unwrap_err();
    match err {
        Error::Read { ref path, .. } => {
            assert!(path.as_ref().unwrap().ends_with("config.json"));
        }
        other => panic!("expected read error, got {:?}", other),
    }
    assert!(!err.pretty().is_empty());
}

#[test]
fn empty_root_parses() {
    let tree: ActionTree = load_from_str("{}").unwrap();
    assert!(tree.root().is_empty());
    assert!(tree.lookup(&[], 'a').is_none());
}
