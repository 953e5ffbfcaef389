//! Account commands.

use tracing::info;

use super::resolve_org;
use crate::cli::output;
use crate::core::domain::Credentials;
use crate::core::store::Store;
use crate::error::{Result, StoreError, ValidationError};

/// Credential fields as given on the command line or via environment.
pub struct Fields {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
}

impl Fields {
    fn into_credentials(self) -> Result<Credentials> {
        let access_key = self
            .access_key
            .ok_or(ValidationError::MissingField("access key (--access-key or AWS_ACCESS_KEY)"))?;
        let secret_key = self
            .secret_key
            .ok_or(ValidationError::MissingField("secret key (--secret-key or AWS_SECRET_KEY)"))?;
        let region = self
            .region
            .ok_or(ValidationError::MissingField("region (--region or AWS_REGION)"))?;
        Ok(Credentials::new(access_key, secret_key, region))
    }
}

/// Add or replace an account.
pub fn add(
    store: &Store,
    provider: &str,
    org: Option<String>,
    name: &str,
    fields: Fields,
) -> Result<()> {
    let credentials = fields.into_credentials()?;
    let org = resolve_org(store, provider, org)?;
    info!("Adding account: {} to {} ({})", name, org, provider);

    if store.list_accounts(provider, &org)?.iter().any(|a| a == name) {
        output::warn(&format!("replacing existing account {}", output::name(name)));
    }
    store.add_account(provider, &org, name, &credentials)?;

    output::success(&format!(
        "added account {} to organization {}",
        output::name(name),
        output::name(&org)
    ));
    Ok(())
}

/// List accounts in an organization.
pub fn list(store: &Store, provider: &str, org: Option<String>, json: bool) -> Result<()> {
    let org = resolve_org(store, provider, org)?;
    let accounts = store.list_accounts(provider, &org)?;

    if json {
        let result = serde_json::json!({
            "organization": org,
            "accounts": accounts,
            "count": accounts.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if accounts.is_empty() {
        output::dimmed(&format!("no accounts in organization {}", org));
    } else {
        output::section(&format!("{} accounts in {}", accounts.len(), org));
        for account in &accounts {
            output::list_item(account, false);
        }
    }
    Ok(())
}

/// Show one account's decrypted credentials.
pub fn show(
    store: &Store,
    provider: &str,
    org: Option<String>,
    name: &str,
    json: bool,
) -> Result<()> {
    let org = resolve_org(store, provider, org)?;
    let credentials = store
        .get_account(provider, &org, name)?
        .ok_or_else(|| StoreError::AccountNotFound {
            org: org.clone(),
            account: name.to_string(),
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&credentials)?);
    } else {
        output::section(&format!("{} / {}", org, name));
        output::kv("access key:", credentials.access_key());
        output::kv("secret key:", credentials.secret_key());
        output::kv("region:    ", credentials.region());
    }
    Ok(())
}
