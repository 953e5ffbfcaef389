//! Input validation for cloudkeys operations.
//!
//! Validates provider, organization and account names and credential values
//! before anything is written.

use crate::core::constants::ACTIVE_KEY;
use crate::core::domain::Credentials;
use crate::error::{Result, ValidationError};

/// Validate a provider name.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` if the name is empty or blank.
pub fn validate_provider(provider: &str) -> Result<()> {
    validate_name("provider", provider)
}

/// Validate an organization name.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` if the name is empty or blank.
pub fn validate_org(org: &str) -> Result<()> {
    validate_name("organization", org)
}

/// Validate an account name.
///
/// Account names share a namespace with the organization's `active` flag on
/// disk, so `active` is rejected.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` or `ValidationError::ReservedName`.
pub fn validate_account(account: &str) -> Result<()> {
    validate_name("account", account)?;
    if account == ACTIVE_KEY {
        return Err(ValidationError::ReservedName {
            kind: "account",
            name: account.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validate that every credential field is present.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` naming the first empty field.
pub fn validate_credentials(credentials: &Credentials) -> Result<()> {
    let fields = [
        ("access key", credentials.access_key()),
        ("secret key", credentials.secret_key()),
        ("region", credentials.region()),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field).into());
        }
    }
    Ok(())
}

fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName(kind).into());
    }
    Ok(())
}
