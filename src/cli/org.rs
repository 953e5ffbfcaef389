//! Organization commands.

use tracing::info;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::Result;

/// Add an organization.
pub fn add(store: &Store, provider: &str, name: &str) -> Result<()> {
    info!("Adding organization: {} ({})", name, provider);
    if store.add_organization(provider, name)? {
        output::success(&format!("added organization {}", output::name(name)));
    } else {
        output::dimmed(&format!("organization {} already exists", name));
    }
    Ok(())
}

/// List organizations, marking the active one.
pub fn list(store: &Store, provider: &str, json: bool) -> Result<()> {
    let orgs = store.list_organizations(provider)?;
    let active = store.active_organization(provider)?;

    if json {
        let result = serde_json::json!({
            "provider": provider,
            "organizations": orgs,
            "active": active,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if orgs.is_empty() {
        output::dimmed(&format!("no {} organizations configured", provider));
    } else {
        output::section(&format!("{} organizations", provider));
        for org in &orgs {
            output::list_item(org, active.as_deref() == Some(org.as_str()));
        }
    }
    Ok(())
}

/// Print the active organization.
pub fn current(store: &Store, provider: &str) -> Result<()> {
    match store.active_organization(provider)? {
        // Plain output for scripting
        Some(org) => println!("{}", org),
        None => output::dimmed("no active organization"),
    }
    Ok(())
}

/// Mark an organization active.
pub fn activate(store: &Store, provider: &str, name: &str) -> Result<()> {
    store.set_organization_active(provider, name, true)?;
    output::success(&format!("organization {} is now active", output::name(name)));
    Ok(())
}

/// Clear the active organization.
pub fn deactivate(store: &Store, provider: &str) -> Result<()> {
    store.deactivate_all(provider)?;
    output::success(&format!("no {} organization is active", provider));
    Ok(())
}
