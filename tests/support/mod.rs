//! Test support utilities for cloudkeys integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Child processes get `HOME` pointed at the temp dir, so the store lands in
/// `<home>/.aws/data` and profiles in `<home>/.aws/`. No process-global state
/// is mutated, so tests can run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with one organization added.
    pub fn with_org(org: &str) -> Self {
        let t = Self::new();
        assert_success(&t.org_add(org));
        t
    }

    /// Create a test environment with an active organization holding the
    /// standard accounts.
    pub fn with_accounts(org: &str) -> Self {
        let t = Self::with_org(org);
        assert_success(&t.org_activate(org));
        for (name, access, secret, region) in STANDARD_ACCOUNTS {
            let output = t.account_add(name, access, secret, region);
            assert!(
                output.status.success(),
                "Failed to add account {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the credential store.
    pub fn data_path(&self) -> PathBuf {
        self.home.path().join(".aws").join("data")
    }

    /// Path of the AWS shared credentials file.
    pub fn credentials_path(&self) -> PathBuf {
        self.home.path().join(".aws").join("credentials")
    }

    /// Path of the AWS shared config file.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".aws").join("config")
    }

    /// Raw store contents.
    pub fn data(&self) -> String {
        std::fs::read_to_string(self.data_path()).expect("failed to read store")
    }
}
