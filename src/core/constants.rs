//! Constants used throughout cloudkeys.
//!
//! Centralizes magic strings and configuration values.

/// Encryption key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// Key used when none is configured. Existing credential files were written
/// under it, so it stays the default.
pub const LEGACY_KEY: &[u8; KEY_LEN] = b"12345678901234567890123456789012";

/// Reserved key holding the active flag inside an organization object.
pub const ACTIVE_KEY: &str = "active";

/// Provider used when none is given.
pub const DEFAULT_PROVIDER: &str = "aws";

/// AWS config directory relative to HOME (~/.aws).
pub const AWS_DIR: &str = ".aws";

/// Credential store file name inside the AWS directory (~/.aws/data).
pub const DATA_FILE: &str = "data";

/// AWS shared credentials file name.
pub const AWS_CREDENTIALS_FILE: &str = "credentials";

/// AWS shared config file name.
pub const AWS_CONFIG_FILE: &str = "config";

/// Optional settings file relative to HOME.
pub const SETTINGS_FILE: &str = ".cloudkeys.toml";

/// Environment variable overriding the store path.
pub const ENV_DATA: &str = "CLOUDKEYS_DATA";

/// Environment variable overriding the AWS profile directory.
pub const ENV_AWS_DIR: &str = "CLOUDKEYS_AWS_DIR";

/// Environment variable holding a hex-encoded encryption key.
pub const ENV_KEY: &str = "CLOUDKEYS_KEY";

/// Environment variable controlling the log filter.
pub const ENV_LOG: &str = "CLOUDKEYS_LOG";
