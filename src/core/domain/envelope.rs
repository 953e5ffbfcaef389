//! Secret envelope type.
//!
//! The at-rest form of a single encrypted string: a random initialization
//! vector plus the ciphertext, both hex-encoded.

use serde::{Deserialize, Serialize};

use crate::core::constants::IV_LEN;
use crate::error::CipherError;

/// One encrypted secret as stored on disk (`{ "iv": ..., "content": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEnvelope {
    #[serde(rename = "iv")]
    init_vector: String,
    #[serde(rename = "content")]
    ciphertext: String,
}

impl SecretEnvelope {
    /// Build an envelope from raw bytes.
    pub fn new(init_vector: &[u8; IV_LEN], ciphertext: &[u8]) -> Self {
        Self {
            init_vector: hex::encode(init_vector),
            ciphertext: hex::encode(ciphertext),
        }
    }

    /// Build an envelope from already hex-encoded parts.
    ///
    /// No validation happens here; malformed input surfaces on decrypt.
    pub fn from_hex(init_vector: impl Into<String>, ciphertext: impl Into<String>) -> Self {
        Self {
            init_vector: init_vector.into(),
            ciphertext: ciphertext.into(),
        }
    }

    /// Hex-encoded initialization vector.
    pub fn init_vector(&self) -> &str {
        &self.init_vector
    }

    /// Hex-encoded ciphertext.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Decode the initialization vector.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the value is not hex or
    /// not exactly 16 bytes long.
    pub fn init_vector_bytes(&self) -> Result<[u8; IV_LEN], CipherError> {
        let bytes = hex::decode(&self.init_vector)
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid iv: {}", e)))?;
        bytes.try_into().map_err(|b: Vec<u8>| {
            CipherError::DecryptionFailed(format!(
                "invalid iv length: expected {} bytes, got {}",
                IV_LEN,
                b.len()
            ))
        })
    }

    /// Decode the ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the value is not hex.
    pub fn ciphertext_bytes(&self) -> Result<Vec<u8>, CipherError> {
        hex::decode(&self.ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid ciphertext: {}", e)))
    }
}
