//! Error types for cloudkeys.
//!
//! A single top-level [`Error`] wraps one enum per concern so callers can
//! match on the failure they care about and let the rest bubble up with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the credential store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file exists but is not a valid document.
    ///
    /// `raw` holds the unreadable contents for diagnostics.
    #[error("credential store is corrupt: {path}: {source}")]
    Corrupt {
        path: PathBuf,
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("organization '{0}' not found")]
    OrganizationNotFound(String),

    #[error("account '{account}' not found under organization '{org}'")]
    AccountNotFound { org: String, account: String },

    #[error("no active organization for provider '{0}'")]
    NoActiveOrganization(String),

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while encrypting or decrypting secrets.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid encryption key: {0}")]
    InvalidKey(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    #[error("'{name}' is a reserved {kind} name")]
    ReservedName { kind: &'static str, name: String },

    #[error("missing required value: {0}")]
    MissingField(&'static str),

    #[error("provider '{0}' is not supported")]
    UnsupportedProvider(String),
}

/// Errors raised while writing provider profile files.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("failed to write profile file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors in the settings layer.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unable to determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
