//! Organization and provider bucket types.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::EncryptedAccount;
use crate::core::constants::ACTIVE_KEY;

/// A named group of accounts within a provider.
///
/// On disk the `active` flag is a sibling of the account entries, so an
/// account can never be called `active`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    accounts: BTreeMap<String, EncryptedAccount>,
    active: bool,
}

impl Organization {
    /// Create an empty, inactive organization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this organization is the selected one.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Look up an account.
    pub fn account(&self, name: &str) -> Option<&EncryptedAccount> {
        self.accounts.get(name)
    }

    /// Insert or replace an account.
    pub fn insert_account(&mut self, name: impl Into<String>, account: EncryptedAccount) {
        self.accounts.insert(name.into(), account);
    }

    /// Account names, sorted.
    pub fn account_names(&self) -> Vec<String> {
        self.accounts.keys().cloned().collect()
    }

    /// True when the organization holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Serialize for Organization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.accounts.len() + 1))?;
        for (name, account) in &self.accounts {
            map.serialize_entry(name, account)?;
        }
        map.serialize_entry(ACTIVE_KEY, &self.active)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Organization {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut org = Organization::new();
        for (name, value) in raw {
            if name == ACTIVE_KEY {
                // Older files may carry `null` here; treat anything but `true` as inactive.
                org.active = value.as_bool().unwrap_or(false);
                continue;
            }
            let account: EncryptedAccount = serde_json::from_value(value)
                .map_err(|e| de::Error::custom(format!("account '{}': {}", name, e)))?;
            org.accounts.insert(name, account);
        }
        Ok(org)
    }
}

/// All organizations for one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderBucket {
    orgs: BTreeMap<String, Organization>,
}

impl ProviderBucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an organization if it is not already present.
    ///
    /// Returns `true` when a new organization was created.
    pub fn add_organization(&mut self, name: &str) -> bool {
        if self.orgs.contains_key(name) {
            return false;
        }
        self.orgs.insert(name.to_string(), Organization::new());
        true
    }

    /// Look up an organization.
    pub fn organization(&self, name: &str) -> Option<&Organization> {
        self.orgs.get(name)
    }

    /// Look up an organization for mutation.
    pub fn organization_mut(&mut self, name: &str) -> Option<&mut Organization> {
        self.orgs.get_mut(name)
    }

    /// Organization names, sorted.
    pub fn organization_names(&self) -> Vec<String> {
        self.orgs.keys().cloned().collect()
    }

    /// The active organization, if any.
    ///
    /// Should more than one be flagged, the lexicographically smallest name wins.
    pub fn active_organization(&self) -> Option<&str> {
        self.orgs
            .iter()
            .find(|(_, org)| org.is_active())
            .map(|(name, _)| name.as_str())
    }

    /// Number of organizations flagged active.
    pub fn active_count(&self) -> usize {
        self.orgs.values().filter(|org| org.is_active()).count()
    }

    /// Set every organization's flag to `name == target && active`.
    ///
    /// Passing `active = false` therefore clears every flag, not just the
    /// target's.
    pub fn set_exclusive_active(&mut self, target: &str, active: bool) {
        for (name, org) in self.orgs.iter_mut() {
            org.set_active(name == target && active);
        }
    }

    /// Clear every active flag.
    pub fn deactivate_all(&mut self) {
        for org in self.orgs.values_mut() {
            org.set_active(false);
        }
    }

    /// True when the bucket has no organizations.
    pub fn is_empty(&self) -> bool {
        self.orgs.is_empty()
    }
}
