//! The persisted credential document.
//!
//! Provider buckets are kept as raw JSON until an operation asks for one,
//! so providers this tool does not touch round-trip byte-for-byte in meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ProviderBucket;

/// Mapping from provider name to its bucket of organizations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    providers: BTreeMap<String, serde_json::Value>,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from its JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Parse a document from raw file bytes.
    ///
    /// Bytes that are not UTF-8 fail like any other malformed JSON.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// True when no provider is present.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Typed view of one provider's bucket.
    ///
    /// Returns `Ok(None)` when the provider is absent, and an error when the
    /// stored value does not match the bucket schema.
    pub fn bucket(&self, provider: &str) -> serde_json::Result<Option<ProviderBucket>> {
        self.providers
            .get(provider)
            .map(|value| ProviderBucket::deserialize(value))
            .transpose()
    }

    /// Replace one provider's bucket.
    pub fn set_bucket(&mut self, provider: &str, bucket: &ProviderBucket) -> serde_json::Result<()> {
        let value = serde_json::to_value(bucket)?;
        self.providers.insert(provider.to_string(), value);
        Ok(())
    }
}
