//! Encryption key handling.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{KEY_LEN, LEGACY_KEY};
use crate::error::CipherError;

/// A 256-bit symmetric key. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey([u8; KEY_LEN]);

impl CipherKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// The fixed key existing credential files were written with.
    pub fn legacy() -> Self {
        Self(*LEGACY_KEY)
    }

    /// Parse a key from 64 hex characters.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the input is not hex or does not
    /// decode to exactly 32 bytes.
    pub fn from_hex(text: &str) -> Result<Self, CipherError> {
        let mut bytes = hex::decode(text.trim())
            .map_err(|e| CipherError::InvalidKey(format!("not hex: {}", e)))?;
        if bytes.len() != KEY_LEN {
            let len = bytes.len();
            bytes.zeroize();
            return Err(CipherError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_LEN, len
            )));
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);
        bytes.zeroize();
        Ok(Self(key))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Default for CipherKey {
    fn default() -> Self {
        Self::legacy()
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CipherKey(<redacted>)")
    }
}
