//! Cloudkeys - encrypted local store for cloud credentials.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cloudkeys::cli::output;
use cloudkeys::cli::{execute, Cli};
use cloudkeys::core::constants::ENV_LOG;
use cloudkeys::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cloudkeys=debug")
        } else {
            EnvFilter::new("cloudkeys=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.provider) {
        let suggestion = match &e {
            Error::Store(StoreError::NoActiveOrganization(_)) => {
                Some("run: cloudkeys org activate <name>, or pass --org".to_string())
            }
            Error::Store(StoreError::OrganizationNotFound(_)) => {
                Some("run: cloudkeys org list".to_string())
            }
            Error::Store(StoreError::AccountNotFound { .. }) => {
                Some("run: cloudkeys account list --org <name>".to_string())
            }
            Error::Store(StoreError::Corrupt { path, .. }) => Some(format!(
                "fix or move aside {} (it was not modified)",
                path.display()
            )),
            Error::Cipher(_) => {
                Some("check CLOUDKEYS_KEY matches the key the store was written with".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
