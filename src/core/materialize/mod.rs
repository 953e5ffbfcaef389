//! Provider profile materialization.
//!
//! Writes decrypted credentials into the files a provider's own tooling
//! reads. This is the one place secrets leave the encrypted store in
//! plaintext.

mod aws;

pub use aws::AwsProfiles;

use crate::core::config::Settings;
use crate::core::domain::Credentials;
use crate::error::{Result, ValidationError};

/// Writes one account's credentials as a provider profile.
pub trait Materializer {
    /// Write the profile for `org`/`account`.
    ///
    /// Prior contents of the provider's files are replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns `MaterializeError` if a file cannot be written. Implementations
    /// must leave the previous files in place when they fail.
    fn write_profile(&self, org: &str, account: &str, credentials: &Credentials) -> Result<()>;

    /// Provider this materializer writes for.
    fn provider(&self) -> &'static str;
}

/// Profile identifier for an organization/account pair.
pub fn profile_name(org: &str, account: &str) -> String {
    format!("{}-{}", org, account)
}

/// Materializer for `provider`, configured from `settings`.
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedProvider` for providers without a
/// profile format.
pub fn for_provider(provider: &str, settings: &Settings) -> Result<Box<dyn Materializer>> {
    match provider {
        "aws" => Ok(Box::new(AwsProfiles::new(settings.aws_dir.clone()))),
        other => Err(ValidationError::UnsupportedProvider(other.to_string()).into()),
    }
}
