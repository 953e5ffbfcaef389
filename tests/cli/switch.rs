//! Tests for `cloudkeys switch`.

use std::fs;

use crate::support::*;

#[test]
fn test_switch_writes_profile_files() {
    let t = Test::with_accounts("acme");

    let output = t.switch("acme", "staging");
    assert_success(&output);
    assert_stdout_contains(&output, "switched to organization acme");
    assert_stdout_contains(&output, "acme-staging");

    let credentials = fs::read_to_string(t.credentials_path()).unwrap();
    assert_eq!(
        credentials,
        "[acme-staging]\n\
         aws_access_key_id = AKIASTAGE002\n\
         aws_secret_access_key = staging-secret\n\
         region = eu-west-1\n"
    );

    let config = fs::read_to_string(t.config_path()).unwrap();
    assert_eq!(
        config,
        "[profile acme-staging]\nregion = eu-west-1\noutput = json\n"
    );
}

#[test]
fn test_switch_activates_organization() {
    let t = Test::with_accounts("acme");
    assert_success(&t.org_add("globex"));
    assert_success(&t.org_activate("globex"));
    assert_success(&t.run(&[
        "account", "add", "main", "-k", "AKIAGLOBEX01", "-s", "g", "-r", "us-west-1",
    ]));

    assert_success(&t.switch("acme", "prod"));
    assert_eq!(stdout(&t.org_current()).trim(), "acme");

    assert_success(&t.switch("globex", "main"));
    assert_eq!(stdout(&t.org_current()).trim(), "globex");

    // Files hold only the latest profile
    let credentials = fs::read_to_string(t.credentials_path()).unwrap();
    assert!(credentials.starts_with("[globex-main]\n"));
    assert!(!credentials.contains("acme-prod"));
}

#[cfg(unix)]
#[test]
fn test_switch_credentials_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_accounts("acme");
    assert_success(&t.switch("acme", "prod"));

    let mode = fs::metadata(t.credentials_path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_switch_missing_account_changes_nothing() {
    let t = Test::with_accounts("acme");
    assert_success(&t.org_add("globex"));
    assert_success(&t.org_activate("globex"));
    let before = t.data();

    let output = t.switch("acme", "qa");
    assert_failure(&output);
    assert_stderr_contains(&output, "account 'qa' not found under organization 'acme'");
    assert_stderr_contains(&output, "cloudkeys account list");

    assert_eq!(t.data(), before);
    assert_eq!(stdout(&t.org_current()).trim(), "globex");
    assert!(!t.credentials_path().exists());
    assert!(!t.config_path().exists());
}

#[test]
fn test_switch_missing_organization() {
    let t = Test::new();

    let output = t.switch("ghost", "prod");
    assert_failure(&output);
    assert_stderr_contains(&output, "organization 'ghost' not found");
    assert!(!t.data_path().exists());
}

#[test]
fn test_switch_unsupported_provider() {
    let t = Test::new();
    assert_success(&t.run(&["-p", "gcp", "org", "add", "acme"]));
    assert_success(&t.run(&[
        "-p", "gcp", "account", "add", "prod", "-o", "acme", "-k", "K", "-s", "S", "-r", "R",
    ]));
    let before = t.data();

    let output = t.run(&["--provider", "gcp", "switch", "acme", "prod"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "provider 'gcp' is not supported");
    assert_eq!(t.data(), before);
}

#[test]
fn test_switch_honours_aws_dir_override() {
    let t = Test::with_accounts("acme");
    let dir = t.home.path().join("elsewhere");

    let output = t
        .cmd()
        .env("CLOUDKEYS_AWS_DIR", &dir)
        .args(["switch", "acme", "dev"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(dir.join("credentials").exists());
    assert!(dir.join("config").exists());
    assert!(!t.credentials_path().exists());
}
