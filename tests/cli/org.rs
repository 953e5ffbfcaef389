//! Tests for `cloudkeys org` commands.

use crate::support::*;

#[test]
fn test_org_add_creates_store() {
    let t = Test::new();

    let output = t.org_add("acme");
    assert_success(&output);
    assert_stdout_contains(&output, "✓ added organization acme");

    let data: serde_json::Value = serde_json::from_str(&t.data()).unwrap();
    assert_eq!(data["aws"]["acme"]["active"], false);
}

#[test]
fn test_org_add_twice_is_noop() {
    let t = Test::with_org("acme");
    assert_success(&t.org_activate("acme"));

    let output = t.org_add("acme");
    assert_success(&output);
    assert_stdout_contains(&output, "already exists");

    // Re-adding must not reset the active flag
    assert_eq!(stdout(&t.org_current()).trim(), "acme");
}

#[test]
fn test_org_list_marks_active() {
    let t = Test::with_org("acme");
    assert_success(&t.org_add("globex"));
    assert_success(&t.org_activate("globex"));

    let output = t.org_list();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("• acme\n"), "acme should be unmarked: {out}");
    assert!(out.contains("• globex *"), "globex should be marked: {out}");
}

#[test]
fn test_org_list_json() {
    let t = Test::with_org("globex");
    assert_success(&t.org_add("acme"));
    assert_success(&t.org_activate("acme"));

    let output = t.run(&["org", "list", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["provider"], "aws");
    assert_eq!(json["organizations"], serde_json::json!(["acme", "globex"]));
    assert_eq!(json["active"], "acme");
}

#[test]
fn test_org_list_empty() {
    let t = Test::new();

    let output = t.org_list();
    assert_success(&output);
    assert_stdout_contains(&output, "no aws organizations configured");
    assert!(!t.data_path().exists());
}

#[test]
fn test_org_current_without_active() {
    let t = Test::with_org("acme");

    let output = t.org_current();
    assert_success(&output);
    assert_stdout_contains(&output, "no active organization");
}

#[test]
fn test_org_activate_switches_exclusively() {
    let t = Test::with_org("acme");
    assert_success(&t.org_add("globex"));

    assert_success(&t.org_activate("acme"));
    assert_success(&t.org_activate("globex"));

    assert_eq!(stdout(&t.org_current()).trim(), "globex");
    let data: serde_json::Value = serde_json::from_str(&t.data()).unwrap();
    assert_eq!(data["aws"]["acme"]["active"], false);
    assert_eq!(data["aws"]["globex"]["active"], true);
}

#[test]
fn test_org_activate_unknown_fails() {
    let t = Test::with_org("acme");
    let before = t.data();

    let output = t.org_activate("ghost");
    assert_failure(&output);
    assert_stderr_contains(&output, "organization 'ghost' not found");
    assert_stderr_contains(&output, "cloudkeys org list");
    assert_eq!(t.data(), before);
}

#[test]
fn test_org_deactivate() {
    let t = Test::with_org("acme");
    assert_success(&t.org_activate("acme"));

    let output = t.run(&["org", "deactivate"]);
    assert_success(&output);

    assert_stdout_contains(&t.org_current(), "no active organization");
}

#[test]
fn test_providers_are_independent() {
    let t = Test::with_org("acme");
    assert_success(&t.org_activate("acme"));

    let output = t.run(&["--provider", "gcp", "org", "add", "acme"]);
    assert_success(&output);

    let output = t.run(&["-p", "gcp", "org", "current"]);
    assert_stdout_contains(&output, "no active organization");
    assert_eq!(stdout(&t.org_current()).trim(), "acme");
}

#[test]
fn test_empty_org_name_rejected() {
    let t = Test::new();

    let output = t.org_add("  ");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
    assert!(!t.data_path().exists());
}
