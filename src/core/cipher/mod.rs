//! Cryptographic operations.
//!
//! Encrypts individual secret strings into self-contained envelopes.
//!
//! ## Backends
//!
//! - **aes-ctr**: Default. AES-256 in counter mode with a fresh random
//!   16-byte IV per call, compatible with existing credential files.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

mod aes;
mod key;

pub use self::aes::AesCtr;
pub use key::CipherKey;

use crate::core::domain::SecretEnvelope;
use crate::error::Result;

/// Symmetric cipher for single secret strings.
///
/// Each call to `encrypt` uses fresh initialization material, so encrypting
/// the same plaintext twice yields different envelopes.
pub trait Cipher {
    /// Encrypt a plaintext string.
    ///
    /// Infallible for any valid UTF-8 input.
    fn encrypt(&self, plaintext: &str) -> SecretEnvelope;

    /// Decrypt an envelope produced by `encrypt`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the envelope is malformed or
    /// was produced under a different key.
    fn decrypt(&self, envelope: &SecretEnvelope) -> Result<String>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}
