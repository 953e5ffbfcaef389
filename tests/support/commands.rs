//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a cloudkeys command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - credential and settings variables from the parent environment removed
    /// - colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cloudkeys").expect("failed to find cloudkeys binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "AWS_ACCESS_KEY",
            "AWS_SECRET_KEY",
            "AWS_REGION",
            "CLOUDKEYS_DATA",
            "CLOUDKEYS_AWS_DIR",
            "CLOUDKEYS_KEY",
            "CLOUDKEYS_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Run `cloudkeys <args>`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run cloudkeys")
    }

    /// Shortcut for `cloudkeys org add`.
    pub fn org_add(&self, org: &str) -> Output {
        self.run(&["org", "add", org])
    }

    /// Shortcut for `cloudkeys org activate`.
    pub fn org_activate(&self, org: &str) -> Output {
        self.run(&["org", "activate", org])
    }

    /// Shortcut for `cloudkeys org current`.
    pub fn org_current(&self) -> Output {
        self.run(&["org", "current"])
    }

    /// Shortcut for `cloudkeys org list`.
    pub fn org_list(&self) -> Output {
        self.run(&["org", "list"])
    }

    /// Shortcut for `cloudkeys account add` into the active organization.
    pub fn account_add(&self, name: &str, access: &str, secret: &str, region: &str) -> Output {
        self.run(&[
            "account",
            "add",
            name,
            "--access-key",
            access,
            "--secret-key",
            secret,
            "--region",
            region,
        ])
    }

    /// Shortcut for `cloudkeys account show --json`.
    pub fn account_show_json(&self, name: &str) -> Output {
        self.run(&["account", "show", name, "--json"])
    }

    /// Shortcut for `cloudkeys switch`.
    pub fn switch(&self, org: &str, account: &str) -> Output {
        self.run(&["switch", org, account])
    }
}
