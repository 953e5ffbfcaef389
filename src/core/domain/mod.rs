//! Domain types.

mod account;
mod document;
mod envelope;
mod organization;

pub use account::{Credentials, EncryptedAccount};
pub use document::Document;
pub use envelope::SecretEnvelope;
pub use organization::{Organization, ProviderBucket};
