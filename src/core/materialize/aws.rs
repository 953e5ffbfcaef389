//! AWS shared credentials/config writer.

use std::path::{Path, PathBuf};

use tracing::{error, info};
use zeroize::Zeroizing;

use super::{profile_name, Materializer};
use crate::core::constants::{AWS_CONFIG_FILE, AWS_CREDENTIALS_FILE};
use crate::core::domain::Credentials;
use crate::core::store::fs::{self, Staged};
use crate::error::{MaterializeError, Result};

/// Writes `credentials` and `config` under an AWS directory (normally `~/.aws`).
#[derive(Debug, Clone)]
pub struct AwsProfiles {
    dir: PathBuf,
}

impl AwsProfiles {
    /// Target `dir` for both files.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the shared credentials file.
    pub fn credentials_path(&self) -> PathBuf {
        self.dir.join(AWS_CREDENTIALS_FILE)
    }

    /// Path of the shared config file.
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(AWS_CONFIG_FILE)
    }

    /// Render the credentials file for one profile.
    pub fn render_credentials(profile: &str, credentials: &Credentials) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "[{}]\naws_access_key_id = {}\naws_secret_access_key = {}\nregion = {}\n",
            profile,
            credentials.access_key(),
            credentials.secret_key(),
            credentials.region()
        ))
    }

    /// Render the config file for one profile.
    pub fn render_config(profile: &str, credentials: &Credentials) -> String {
        format!(
            "[profile {}]\nregion = {}\noutput = json\n",
            profile,
            credentials.region()
        )
    }
}

impl Materializer for AwsProfiles {
    fn provider(&self) -> &'static str {
        "aws"
    }

    fn write_profile(&self, org: &str, account: &str, credentials: &Credentials) -> Result<()> {
        let profile = profile_name(org, account);
        let credentials_text = Self::render_credentials(&profile, credentials);
        let config_text = Self::render_config(&profile, credentials);

        let credentials_path = self.credentials_path();
        let previous = fs::read_optional(&credentials_path)
            .map(|bytes| bytes.map(Zeroizing::new))
            .map_err(|source| MaterializeError::WriteFailed {
                path: credentials_path.clone(),
                source,
            })?;

        // Stage both before renaming either so a failure leaves both old files.
        let creds = stage(&credentials_path, credentials_text.as_bytes(), CREDENTIALS_MODE)?;
        let config = stage(&self.config_path(), config_text.as_bytes(), Some(0o644))?;

        commit(creds)?;
        if let Err(e) = commit(config) {
            restore_credentials(&credentials_path, previous.as_deref().map(Vec::as_slice));
            return Err(e);
        }

        info!(profile = %profile, dir = %self.dir.display(), "wrote aws profile");
        Ok(())
    }
}

const CREDENTIALS_MODE: Option<u32> = Some(0o600);

/// Put the credentials file back after the config file failed to commit.
fn restore_credentials(path: &Path, previous: Option<&[u8]>) {
    let result = match previous {
        Some(bytes) => fs::write_atomic(path, bytes, CREDENTIALS_MODE),
        None => std::fs::remove_file(path),
    };
    match result {
        Ok(()) => info!(path = %path.display(), "credentials file restored"),
        Err(e) => error!(path = %path.display(), error = %e, "failed to restore credentials file"),
    }
}

fn stage(path: &Path, contents: &[u8], mode: Option<u32>) -> Result<Staged> {
    Staged::new(path, contents, mode).map_err(|source| {
        MaterializeError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn commit(staged: Staged) -> Result<()> {
    let path = staged.dest().to_path_buf();
    staged
        .commit()
        .map_err(|source| MaterializeError::WriteFailed { path, source }.into())
}
