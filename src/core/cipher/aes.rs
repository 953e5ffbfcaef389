//! AES-256-CTR backend implementation.
//!
//! Output is interchangeable with other `aes-256-ctr` implementations that
//! use a 128-bit big-endian counter seeded from the IV.

use ::aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use super::{Cipher, CipherKey};
use crate::core::constants::IV_LEN;
use crate::core::domain::SecretEnvelope;
use crate::error::{CipherError, Result};

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// AES-256 in counter mode under a single injected key.
#[derive(Debug, Clone)]
pub struct AesCtr {
    key: CipherKey,
}

impl AesCtr {
    /// Create a cipher bound to `key`.
    pub fn new(key: CipherKey) -> Self {
        Self { key }
    }

    fn keystream(&self, iv: &[u8; IV_LEN]) -> Aes256Ctr {
        Aes256Ctr::new(self.key.as_bytes().into(), iv.into())
    }
}

impl Cipher for AesCtr {
    fn name(&self) -> &'static str {
        "aes-256-ctr"
    }

    fn encrypt(&self, plaintext: &str) -> SecretEnvelope {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let mut buf = plaintext.as_bytes().to_vec();
        self.keystream(&iv).apply_keystream(&mut buf);

        trace!(ciphertext_len = buf.len(), "encrypted");
        SecretEnvelope::new(&iv, &buf)
    }

    fn decrypt(&self, envelope: &SecretEnvelope) -> Result<String> {
        let iv = envelope.init_vector_bytes()?;
        let mut buf = envelope.ciphertext_bytes()?;
        trace!(ciphertext_len = buf.len(), "decrypting");

        self.keystream(&iv).apply_keystream(&mut buf);

        String::from_utf8(buf).map_err(|e| {
            // The bytes may be key material under the wrong key; wipe them.
            let mut bytes = e.into_bytes();
            zeroize::Zeroize::zeroize(&mut bytes);
            CipherError::DecryptionFailed("plaintext is not valid UTF-8 (wrong key?)".to_string())
                .into()
        })
    }
}
