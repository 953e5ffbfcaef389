//! Account types.
//!
//! [`Credentials`] is the plaintext triple handed to callers and to the
//! materializer. [`EncryptedAccount`] is its at-rest form.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::SecretEnvelope;
use crate::core::cipher::Cipher;
use crate::error::Result;

/// Decrypted credentials for one account.
///
/// Wiped from memory on drop. `Debug` never prints the secret key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    access_key: String,
    secret_key: String,
    region: String,
}

impl Credentials {
    /// Create a credential triple.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
        }
    }

    /// Access key identifier.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Secret access key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Default region.
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

/// At-rest account: each field encrypted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedAccount {
    access_key: SecretEnvelope,
    secret_key: SecretEnvelope,
    region: SecretEnvelope,
}

impl EncryptedAccount {
    /// Encrypt all three fields.
    pub fn seal(credentials: &Credentials, cipher: &dyn Cipher) -> Self {
        Self {
            access_key: cipher.encrypt(credentials.access_key()),
            secret_key: cipher.encrypt(credentials.secret_key()),
            region: cipher.encrypt(credentials.region()),
        }
    }

    /// Decrypt all three fields.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if any field cannot be
    /// decrypted; no partial result is returned.
    pub fn open(&self, cipher: &dyn Cipher) -> Result<Credentials> {
        let access_key = cipher.decrypt(&self.access_key)?;
        let secret_key = cipher.decrypt(&self.secret_key)?;
        let region = cipher.decrypt(&self.region)?;
        Ok(Credentials::new(access_key, secret_key, region))
    }
}
