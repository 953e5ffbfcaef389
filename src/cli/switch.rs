//! Switch command.

use tracing::info;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::materialize::{self, profile_name};
use crate::core::store::Store;
use crate::error::Result;

/// Activate `org` and write `account` as the provider profile.
pub fn execute(
    store: &Store,
    settings: &Settings,
    provider: &str,
    org: &str,
    account: &str,
) -> Result<()> {
    info!("Switching to {}/{} ({})", org, account, provider);
    let materializer = materialize::for_provider(provider, settings)?;
    store.switch_organization(provider, org, account, materializer.as_ref())?;

    output::success(&format!(
        "switched to organization {}",
        output::name(org)
    ));
    output::kv("profile:", output::name(&profile_name(org, account)));
    output::kv("files:  ", output::path(&settings.aws_dir));
    Ok(())
}
