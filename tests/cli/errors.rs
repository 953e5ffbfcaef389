//! Tests for error handling and CLI flags.

use std::fs;

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
    assert_stdout_contains(&output, "switch");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "cloudkeys");
}

#[test]
fn test_completions() {
    let t = Test::new();

    for shell in ["bash", "zsh", "fish", "power-shell"] {
        let output = t.run(&["completions", shell]);
        assert_success(&output);
        assert_stdout_contains(&output, "cloudkeys");
    }
}

#[test]
fn test_completions_ignore_broken_settings() {
    let t = Test::new();
    fs::write(t.home.path().join(".cloudkeys.toml"), "this is = = not toml").unwrap();

    assert_success(&t.run(&["completions", "bash"]));
    assert_failure(&t.org_list());
}

#[test]
fn test_settings_file_relocates_store() {
    let t = Test::new();
    fs::write(
        t.home.path().join(".cloudkeys.toml"),
        "data_path = \"vault/creds.json\"\n",
    )
    .unwrap();

    assert_success(&t.org_add("acme"));
    assert!(t.home.path().join("vault/creds.json").exists());
    assert!(!t.data_path().exists());
}

#[test]
fn test_data_env_overrides_settings_file() {
    let t = Test::new();
    fs::write(
        t.home.path().join(".cloudkeys.toml"),
        "data_path = \"from-file.json\"\n",
    )
    .unwrap();
    let target = t.home.path().join("from-env.json");

    let output = t
        .cmd()
        .env("CLOUDKEYS_DATA", &target)
        .args(["org", "add", "acme"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(target.exists());
    assert!(!t.home.path().join("from-file.json").exists());
}

#[test]
fn test_corrupt_store_blocks_mutations() {
    let t = Test::new();
    fs::create_dir_all(t.data_path().parent().unwrap()).unwrap();
    fs::write(t.data_path(), "{ not json").unwrap();

    let output = t.org_add("acme");
    assert_failure(&output);
    assert_stderr_contains(&output, "credential store is corrupt");
    assert_stderr_contains(&output, "it was not modified");
    assert_eq!(t.data(), "{ not json");
}

#[test]
fn test_corrupt_store_queries_warn() {
    let t = Test::new();
    fs::create_dir_all(t.data_path().parent().unwrap()).unwrap();
    fs::write(t.data_path(), "{ not json").unwrap();

    let output = t.org_list();
    assert_success(&output);
    assert_stdout_contains(&output, "no aws organizations configured");
    assert_stderr_contains(&output, "corrupt");
}

#[test]
fn test_store_preserves_foreign_providers() {
    let t = Test::new();
    fs::create_dir_all(t.data_path().parent().unwrap()).unwrap();
    fs::write(t.data_path(), LEGACY_STORE).unwrap();

    assert_success(&t.org_add("initech"));
    assert_success(&t.switch("acme", "prod"));

    let data: serde_json::Value = serde_json::from_str(&t.data()).unwrap();
    assert_eq!(data["gcp"]["future"], serde_json::json!(["kept", "as", "is"]));
    assert_eq!(data["aws"]["acme"]["active"], true);
    assert_eq!(data["aws"]["initech"]["active"], false);
}

#[test]
fn test_missing_subcommand_prints_usage() {
    use predicates::prelude::*;

    let t = Test::new();
    t.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    t.cmd()
        .args(["org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("add").and(predicate::str::contains("activate")));
}
