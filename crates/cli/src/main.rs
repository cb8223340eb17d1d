//! Community Plant CLI - database migrations, seed data and administrators.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! cp-cli migrate
//!
//! # Apply pending seed documents
//! cp-cli seed
//!
//! # Create an administrator
//! cp-cli admin create -e ops@garden.org -p 'long-password' -r administrator
//!
//! # Replace an administrator's credential (e.g. the seeded adm@adm.com)
//! cp-cli admin set-password -e adm@adm.com -p 'long-password'
//!
//! # Check a password without logging in (exit code 1 on mismatch)
//! cp-cli admin verify -e adm@adm.com -p 'long-password'
//!
//! # Inspect and maintain administrator records
//! cp-cli admin list
//! cp-cli admin show 1
//! cp-cli admin update 2 -e ops@garden.org -r gardener
//! cp-cli admin delete 2
//! ```
//!
//! All commands read `DATABASE_URL` from the environment or `.env`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cp-cli")]
#[command(author, version, about = "Community Plant CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Apply seed documents not yet recorded in `seed_history`
    Seed,
    /// Manage administrators
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new administrator
    Create {
        /// Administrator email address
        #[arg(short, long)]
        email: String,

        /// Plaintext password; only its digest is stored
        #[arg(short, long)]
        password: String,

        /// Role (`administrator`, `gardener`, `volunteer`)
        #[arg(short, long, default_value = "administrator")]
        role: String,
    },
    /// Replace an administrator's credential
    SetPassword {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Check a password against the stored credential
    Verify {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// List all administrators
    List,
    /// Show one administrator
    Show {
        /// Administrator ID
        id: i32,
    },
    /// Change an administrator's email and role
    Update {
        /// Administrator ID
        id: i32,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "administrator")]
        role: String,
    },
    /// Delete an administrator
    Delete {
        /// Administrator ID
        id: i32,
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
        Commands::Seed => commands::seed::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                password,
                role,
            } => {
                commands::admin::create(&email, &password, &role).await?;
            }
            AdminAction::SetPassword { email, password } => {
                commands::admin::set_password(&email, &password).await?;
            }
            AdminAction::Verify { email, password } => {
                commands::admin::verify(&email, &password).await?;
            }
            AdminAction::List => commands::admin::list().await?,
            AdminAction::Show { id } => commands::admin::show(id).await?,
            AdminAction::Update { id, email, role } => {
                commands::admin::update(id, &email, &role).await?;
            }
            AdminAction::Delete { id } => commands::admin::delete(id).await?,
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
    fn test_admin_create_defaults_role() {
        let cli = Cli::try_parse_from([
            "cp-cli", "admin", "create", "-e", "ops@garden.org", "-p", "long-password",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Admin {
                action: AdminAction::Create { ref role, .. }
            }) if role == "administrator"
        ));
    }

    #[test]
    fn test_set_password_uses_kebab_case() {
        let cli = Cli::try_parse_from([
            "cp-cli", "admin", "set-password", "-e", "adm@adm.com", "-p", "long-password",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Admin {
                action: AdminAction::SetPassword { .. }
            })
        ));
    }

    #[test]
    fn test_admin_delete_takes_positional_id() {
        let cli = Cli::try_parse_from(["cp-cli", "admin", "delete", "2"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Admin {
                action: AdminAction::Delete { id: 2 }
            })
        ));

        assert!(Cli::try_parse_from(["cp-cli", "admin", "delete", "two"]).is_err());
    }

    #[test]
    fn test_admin_update_requires_email() {
        assert!(Cli::try_parse_from(["cp-cli", "admin", "update", "2"]).is_err());

        let cli = Cli::try_parse_from([
            "cp-cli", "admin", "update", "2", "-e", "ops@garden.org", "-r", "gardener",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Admin {
                action: AdminAction::Update { id: 2, ref role, .. }
            }) if role == "gardener"
        ));
    }
}
