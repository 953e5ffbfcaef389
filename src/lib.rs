//! Cloudkeys - an encrypted local store for cloud credentials.
//!
//! Accounts (access key, secret key, region) are grouped into organizations
//! per provider. One organization per provider can be active; switching to
//! an account writes it into the provider's own profile files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── org           # Organization commands
//! │   ├── account       # Account commands
//! │   ├── switch        # Activate + write profile
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # AES-256-CTR secret encryption
//!     ├── config        # Settings (paths, key)
//!     ├── domain/       # Document, organizations, accounts, envelopes
//!     ├── materialize/  # Provider profile writers (AWS)
//!     ├── store/        # Load-mutate-persist credential store
//!     └── validation    # Name and credential checks
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{AesCtr, Cipher, CipherKey};
pub use crate::core::config::Settings;
pub use crate::core::domain::Credentials;
pub use crate::core::materialize::{AwsProfiles, Materializer};
pub use crate::core::store::Store;
