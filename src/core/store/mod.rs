//! The credential store.
//!
//! A [`Store`] owns one backing JSON file and the cipher used for the secrets
//! inside it. Every public operation is a complete load-mutate-persist cycle:
//! the file is re-read, changed in memory and atomically replaced. Nothing is
//! cached between calls.
//!
//! Read-only queries tolerate a corrupt file by logging a warning and
//! answering from an empty document. Mutations never do: they fail with
//! `StoreError::Corrupt` and leave the file untouched.

pub mod fs;

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::core::cipher::{AesCtr, Cipher, CipherKey};
use crate::core::config::Settings;
use crate::core::domain::{Credentials, Document, EncryptedAccount, ProviderBucket};
use crate::core::materialize::Materializer;
use crate::core::validation;
use crate::error::{Error, Result, StoreError, ValidationError};

/// Permissions for the store file.
const STORE_MODE: u32 = 0o600;

/// Accessor for the multi-provider credential document.
pub struct Store {
    path: PathBuf,
    cipher: Box<dyn Cipher>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("cipher", &self.cipher.name())
            .finish()
    }
}

impl Store {
    /// Store at `path` encrypted with AES-256-CTR under `key`.
    pub fn new(path: impl Into<PathBuf>, key: CipherKey) -> Self {
        Self::with_cipher(path, AesCtr::new(key))
    }

    /// Store at `path` using a custom cipher.
    pub fn with_cipher(path: impl Into<PathBuf>, cipher: impl Cipher + 'static) -> Self {
        Self {
            path: path.into(),
            cipher: Box::new(cipher),
        }
    }

    /// Store described by resolved settings.
    pub fn open(settings: &Settings) -> Self {
        Self::new(settings.data_path.clone(), settings.key.clone())
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole document.
    ///
    /// A missing file yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` (carrying the raw text) if the file is
    /// not a UTF-8 JSON object, or `StoreError::ReadFailed` on I/O failure.
    pub fn load_document(&self) -> Result<Document> {
        self.load_raw().map(|(_, doc)| doc)
    }

    /// Atomically replace the backing file with `doc`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the file cannot be written.
    pub fn save_document(&self, doc: &Document) -> Result<()> {
        let json = doc.to_json()?;
        self.write_bytes(json.as_bytes())?;
        debug!(path = %self.path.display(), "store saved");
        Ok(())
    }

    /// Add an organization if absent.
    ///
    /// Returns `true` if it was created. An existing organization, including
    /// its active flag, is left alone.
    pub fn add_organization(&self, provider: &str, org: &str) -> Result<bool> {
        validation::validate_provider(provider)?;
        validation::validate_org(org)?;

        let created = self.mutate(provider, |bucket| Ok(bucket.add_organization(org)))?;
        if created {
            info!(provider, org, "organization added");
        } else {
            debug!(provider, org, "organization already present");
        }
        Ok(created)
    }

    /// Encrypt and store an account, replacing any account of the same name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for empty names or fields,
    /// `StoreError::OrganizationNotFound` if the organization does not exist.
    pub fn add_account(
        &self,
        provider: &str,
        org: &str,
        account: &str,
        credentials: &Credentials,
    ) -> Result<()> {
        validation::validate_provider(provider)?;
        validation::validate_org(org)?;
        validation::validate_account(account)?;
        validation::validate_credentials(credentials)?;

        let sealed = EncryptedAccount::seal(credentials, self.cipher.as_ref());
        self.mutate(provider, |bucket| {
            let organization = bucket
                .organization_mut(org)
                .ok_or_else(|| StoreError::OrganizationNotFound(org.to_string()))?;
            organization.insert_account(account, sealed);
            Ok(())
        })?;

        info!(provider, org, account, "account saved");
        Ok(())
    }

    /// Decrypt one account.
    ///
    /// Returns `Ok(None)` if the provider, organization or account is absent.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the stored secrets cannot
    /// be decrypted with this store's key.
    pub fn get_account(
        &self,
        provider: &str,
        org: &str,
        account: &str,
    ) -> Result<Option<Credentials>> {
        let bucket = self.read_bucket(provider)?;
        let Some(sealed) = bucket.organization(org).and_then(|o| o.account(account)) else {
            debug!(provider, org, account, "account not found");
            return Ok(None);
        };
        sealed.open(self.cipher.as_ref()).map(Some)
    }

    /// Account names in an organization, sorted. Empty if the organization
    /// or provider is absent.
    pub fn list_accounts(&self, provider: &str, org: &str) -> Result<Vec<String>> {
        let bucket = self.read_bucket(provider)?;
        Ok(bucket
            .organization(org)
            .map(|o| o.account_names())
            .unwrap_or_default())
    }

    /// Organization names for a provider, sorted.
    pub fn list_organizations(&self, provider: &str) -> Result<Vec<String>> {
        Ok(self.read_bucket(provider)?.organization_names())
    }

    /// The active organization for a provider.
    ///
    /// If the file somehow flags several, the lexicographically smallest
    /// name is returned.
    pub fn active_organization(&self, provider: &str) -> Result<Option<String>> {
        let bucket = self.read_bucket(provider)?;
        if bucket.active_count() > 1 {
            warn!(provider, "multiple organizations flagged active");
        }
        Ok(bucket.active_organization().map(str::to_string))
    }

    /// Set every organization's flag to `name == org && active`.
    ///
    /// With `active = false` this clears *all* flags for the provider, not
    /// just `org`'s. Prefer [`Store::deactivate_all`] when that is the intent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OrganizationNotFound` if `org` does not exist.
    pub fn set_organization_active(&self, provider: &str, org: &str, active: bool) -> Result<()> {
        self.mutate(provider, |bucket| {
            if bucket.organization(org).is_none() {
                return Err(StoreError::OrganizationNotFound(org.to_string()).into());
            }
            bucket.set_exclusive_active(org, active);
            Ok(())
        })?;

        info!(provider, org, active, "organization flag updated");
        Ok(())
    }

    /// Clear the active flag on every organization of a provider.
    pub fn deactivate_all(&self, provider: &str) -> Result<()> {
        self.mutate(provider, |bucket| {
            bucket.deactivate_all();
            Ok(())
        })?;
        info!(provider, "all organizations deactivated");
        Ok(())
    }

    /// Make `org` active and write `account`'s credentials as the provider
    /// profile.
    ///
    /// The account is decrypted before anything is written; a decryption
    /// failure leaves both the store and the profile files unchanged. If the
    /// materializer fails after the store was saved, the store file is
    /// restored to its previous contents.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnsupportedProvider` if `materializer` writes
    /// for a different provider, `StoreError::OrganizationNotFound`,
    /// `StoreError::AccountNotFound`, `CipherError::DecryptionFailed`, or the
    /// materializer's error.
    pub fn switch_organization(
        &self,
        provider: &str,
        org: &str,
        account: &str,
        materializer: &dyn Materializer,
    ) -> Result<()> {
        if materializer.provider() != provider {
            return Err(ValidationError::UnsupportedProvider(provider.to_string()).into());
        }

        let (previous, mut doc) = self.load_raw()?;
        let mut bucket = self.bucket_of(&doc, provider)?.unwrap_or_default();

        let organization = bucket
            .organization(org)
            .ok_or_else(|| StoreError::OrganizationNotFound(org.to_string()))?;
        let sealed = organization
            .account(account)
            .ok_or_else(|| StoreError::AccountNotFound {
                org: org.to_string(),
                account: account.to_string(),
            })?;
        let credentials = sealed.open(self.cipher.as_ref())?;

        bucket.set_exclusive_active(org, true);
        doc.set_bucket(provider, &bucket)?;
        self.save_document(&doc)?;

        if let Err(e) = materializer.write_profile(org, account, &credentials) {
            error!(provider, org, account, error = %e, "profile write failed, rolling back");
            self.restore(previous.as_deref());
            return Err(e);
        }

        info!(provider, org, account, "switched organization");
        Ok(())
    }

    /// Read the file, returning its raw bytes alongside the parsed document.
    fn load_raw(&self) -> Result<(Option<Vec<u8>>, Document)> {
        debug!(path = %self.path.display(), "loading store");

        let raw = fs::read_optional(&self.path).map_err(|source| StoreError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        let Some(bytes) = raw else {
            debug!("store file absent, starting empty");
            return Ok((None, Document::new()));
        };

        match Document::from_slice(&bytes) {
            Ok(doc) => Ok((Some(bytes), doc)),
            Err(source) => Err(StoreError::Corrupt {
                path: self.path.clone(),
                raw: String::from_utf8_lossy(&bytes).into_owned(),
                source,
            }
            .into()),
        }
    }

    /// Typed bucket for `provider`; a schema mismatch counts as corruption.
    fn bucket_of(&self, doc: &Document, provider: &str) -> Result<Option<ProviderBucket>> {
        doc.bucket(provider).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                raw: doc.to_json().unwrap_or_default(),
                source,
            }
            .into()
        })
    }

    /// Bucket for a read-only query, falling back to empty on corruption.
    fn read_bucket(&self, provider: &str) -> Result<ProviderBucket> {
        let result = self
            .load_document()
            .and_then(|doc| self.bucket_of(&doc, provider));

        match result {
            Ok(bucket) => Ok(bucket.unwrap_or_default()),
            Err(Error::Store(StoreError::Corrupt { path, source, .. })) => {
                warn!(
                    path = %path.display(),
                    error = %source,
                    "credential store is corrupt, answering from an empty document"
                );
                Ok(ProviderBucket::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Load, apply `f` to the provider's bucket and persist if it changed.
    ///
    /// Nothing is written when `f` fails.
    fn mutate<T, F>(&self, provider: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut ProviderBucket) -> Result<T>,
    {
        let mut doc = self.load_document()?;
        let existing = self.bucket_of(&doc, provider)?;
        let mut bucket = existing.clone().unwrap_or_default();

        let value = f(&mut bucket)?;

        let changed = match &existing {
            Some(before) => *before != bucket,
            None => !bucket.is_empty(),
        };
        if changed {
            doc.set_bucket(provider, &bucket)?;
            self.save_document(&doc)?;
        } else {
            debug!(provider, "no changes to persist");
        }
        Ok(value)
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        fs::write_atomic(&self.path, bytes, Some(STORE_MODE)).map_err(|source| {
            StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    /// Put the file back the way it was before a failed switch.
    fn restore(&self, previous: Option<&[u8]>) {
        let result = match previous {
            Some(bytes) => self.write_bytes(bytes),
            None => std::fs::remove_file(&self.path).map_err(Error::from),
        };
        match result {
            Ok(()) => info!(path = %self.path.display(), "store restored"),
            Err(e) => error!(path = %self.path.display(), error = %e, "failed to restore store"),
        }
    }
}
