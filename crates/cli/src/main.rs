//! Wanderlust CLI - database migrations and admin provisioning.
//!
//! # Usage
//!
//! ```bash
//! # Run admin database migrations
//! wl-cli migrate
//!
//! # Provision an admin (password from --password or WL_ADMIN_PASSWORD)
//! wl-cli admin create -e ops@wanderlust.travel -n "Ops"
//!
//! # Remove an admin (ends their sessions)
//! wl-cli admin remove -e ops@wanderlust.travel
//!
//! # List admins
//! wl-cli admin list
//!
//! # Print an Argon2id hash for seeding
//! wl-cli admin hash-password
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wl-cli")]
#[command(author, version, about = "Wanderlust CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run admin database migrations
    Migrate,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password
        #[arg(long, env = "WL_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Remove an admin
    Remove {
        /// Admin email address
        #[arg(short, long)]
        email: String,
    },
    /// List admins
    List,
    /// Print an Argon2id hash of a password
    HashPassword {
        #[arg(long, env = "WL_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
            } => commands::admin::create(&email, &name, &password).await?,
            AdminAction::Remove { email } => commands::admin::remove(&email).await?,
            AdminAction::List => commands::admin::list().await?,
            AdminAction::HashPassword { password } => commands::admin::print_hash(&password)?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_admin_create() {
        let cli = Cli::try_parse_from([
            "wl-cli",
            "admin",
            "create",
            "-e",
            "ops@wanderlust.travel",
            "-n",
            "Ops",
            "--password",
            "correct horse",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Admin {
                action: AdminAction::Create { .. }
            })
        ));
    }
}
