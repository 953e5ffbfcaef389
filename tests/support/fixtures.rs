//! Test fixtures and constants.

/// Accounts added by `Test::with_accounts`: (name, access key, secret key, region).
pub const STANDARD_ACCOUNTS: &[(&str, &str, &str, &str)] = &[
    ("prod", "AKIAPROD0001", "prod/secret+key", "us-east-1"),
    ("staging", "AKIASTAGE002", "staging-secret", "eu-west-1"),
    ("dev", "AKIADEV00003", "dev secret with spaces", "ap-southeast-2"),
];

/// A 64-hex-character key different from the default.
pub const ALT_KEY_HEX: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";

/// Store file in the legacy layout with one active organization, written
/// under the default key. `acme/prod` decrypts to `LEGACY_CREDENTIALS`.
pub const LEGACY_STORE: &str = r#"{
  "aws": {
    "acme": {
      "prod": {
        "accessKey": { "iv": "000102030405060708090a0b0c0d0e0f", "content": "afaa85d6a8b7bd25834c4716" },
        "secretKey": { "iv": "101112131415161718191a1b1c1d1e1f", "content": "d01e3c8c84739fab31f511a1431803ba6f" },
        "region": { "iv": "202122232425262728292a2b2c2d2e2f", "content": "0e652c19cad280cb32" }
      },
      "active": true
    },
    "globex": {}
  },
  "gcp": { "future": ["kept", "as", "is"] }
}"#;

/// Plaintext of the `acme/prod` account in `LEGACY_STORE`.
pub const LEGACY_CREDENTIALS: (&str, &str, &str) =
    ("AKIALEGACY01", "legacy/Secret+Key", "us-west-2");
