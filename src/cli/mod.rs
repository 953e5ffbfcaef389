//! Command-line interface.

pub mod account;
pub mod completions;
pub mod org;
pub mod output;
pub mod switch;

use clap::{Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::constants::DEFAULT_PROVIDER;
use crate::core::store::Store;
use crate::error::{Result, StoreError};

/// Cloudkeys - switch between cloud accounts grouped into organizations.
#[derive(Parser)]
#[command(
    name = "cloudkeys",
    about = "Encrypted local store for cloud credentials, grouped by organization",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Cloud provider the command applies to
    #[arg(short, long, global = true, default_value = DEFAULT_PROVIDER)]
    pub provider: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage organizations
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Activate an organization and write an account's provider profile
    Switch {
        /// Organization name
        org: String,
        /// Account name
        account: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands.
#[derive(Subcommand)]
pub enum OrgAction {
    /// Add an organization
    Add {
        /// Organization name
        name: String,
    },

    /// List organizations
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active organization
    Current,

    /// Mark an organization active without writing profile files
    Activate {
        /// Organization name
        name: String,
    },

    /// Clear the active organization
    Deactivate,
}

/// Account subcommands.
#[derive(Subcommand)]
pub enum AccountAction {
    /// Add or replace an account
    Add {
        /// Account name
        name: String,
        /// Organization (defaults to the active one)
        #[arg(short, long)]
        org: Option<String>,
        /// Access key ID
        #[arg(short = 'k', long, env = "AWS_ACCESS_KEY", hide_env_values = true)]
        access_key: Option<String>,
        /// Secret access key
        #[arg(short, long, env = "AWS_SECRET_KEY", hide_env_values = true)]
        secret_key: Option<String>,
        /// Default region
        #[arg(short, long, env = "AWS_REGION")]
        region: Option<String>,
    },

    /// List accounts in an organization
    List {
        /// Organization (defaults to the active one)
        #[arg(short, long)]
        org: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an account's decrypted credentials
    Show {
        /// Account name
        name: String,
        /// Organization (defaults to the active one)
        #[arg(short, long)]
        org: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, provider: &str) -> Result<()> {
    use Command::*;

    // Completions must work even when the settings file is broken.
    if let Completions { shell } = command {
        return completions::execute(shell);
    }

    let settings = Settings::load()?;
    let store = Store::open(&settings);

    match command {
        Org { action } => match action {
            OrgAction::Add { name } => org::add(&store, provider, &name),
            OrgAction::List { json } => org::list(&store, provider, json),
            OrgAction::Current => org::current(&store, provider),
            OrgAction::Activate { name } => org::activate(&store, provider, &name),
            OrgAction::Deactivate => org::deactivate(&store, provider),
        },
        Account { action } => match action {
            AccountAction::Add {
                name,
                org,
                access_key,
                secret_key,
                region,
            } => account::add(
                &store,
                provider,
                org,
                &name,
                account::Fields {
                    access_key,
                    secret_key,
                    region,
                },
            ),
            AccountAction::List { org, json } => account::list(&store, provider, org, json),
            AccountAction::Show { name, org, json } => {
                account::show(&store, provider, org, &name, json)
            }
        },
        Switch { org, account } => switch::execute(&store, &settings, provider, &org, &account),
        Completions { shell } => completions::execute(shell),
    }
}

/// Use `org` if given, otherwise the provider's active organization.
fn resolve_org(store: &Store, provider: &str, org: Option<String>) -> Result<String> {
    match org {
        Some(org) => Ok(org),
        None => store
            .active_organization(provider)?
            .ok_or_else(|| StoreError::NoActiveOrganization(provider.to_string()).into()),
    }
}
