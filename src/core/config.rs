//! Settings management.
//!
//! Resolves where the credential store and AWS profile files live and which
//! key encrypts the store. Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults (`~/.aws/data`, `~/.aws`, the legacy key)
//! 2. `~/.cloudkeys.toml`
//! 3. `CLOUDKEYS_DATA`, `CLOUDKEYS_AWS_DIR`, `CLOUDKEYS_KEY`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher::CipherKey;
use crate::core::constants;
use crate::error::{ConfigError, Error, Result};

/// Contents of the optional `~/.cloudkeys.toml` file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Credential store path. Relative paths are taken from HOME.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    /// Directory receiving the AWS `credentials` and `config` files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_dir: Option<PathBuf>,
    /// Encryption key as 64 hex characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl SettingsFile {
    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e).into())
    }

    /// Read the settings file if it exists.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "loading settings file");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents).map(Some)
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential store file.
    pub data_path: PathBuf,
    /// AWS profile directory.
    pub aws_dir: PathBuf,
    /// Store encryption key.
    pub key: CipherKey,
}

impl Settings {
    /// Defaults rooted at `home`.
    pub fn with_home(home: &Path) -> Self {
        let aws_dir = home.join(constants::AWS_DIR);
        Self {
            data_path: aws_dir.join(constants::DATA_FILE),
            aws_dir,
            key: CipherKey::legacy(),
        }
    }

    /// Load settings for the current user.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the home directory cannot be found, the
    /// settings file is malformed, or a configured key is invalid.
    pub fn load() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let file = SettingsFile::read(&home.join(constants::SETTINGS_FILE))?;
        Self::resolve(&home, file, |name| std::env::var(name).ok())
    }

    /// Merge defaults, an optional settings file and environment lookups.
    pub fn resolve<F>(home: &Path, file: Option<SettingsFile>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::with_home(home);
        let file = file.unwrap_or_default();

        if let Some(path) = file.data_path {
            settings.data_path = home.join(path);
        }
        if let Some(dir) = file.aws_dir {
            settings.aws_dir = home.join(dir);
        }
        if let Some(key) = file.key {
            settings.key = parse_key(&key)?;
        }

        let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());
        if let Some(path) = lookup(constants::ENV_DATA) {
            settings.data_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(constants::ENV_AWS_DIR) {
            settings.aws_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(constants::ENV_KEY) {
            settings.key = parse_key(&key)?;
        }

        debug!(
            data = %settings.data_path.display(),
            aws_dir = %settings.aws_dir.display(),
            "settings resolved"
        );
        Ok(settings)
    }
}

fn parse_key(text: &str) -> Result<CipherKey> {
    CipherKey::from_hex(text).map_err(|e| {
        Error::from(ConfigError::InvalidValue {
            field: "key",
            reason: e.to_string(),
        })
    })
}
