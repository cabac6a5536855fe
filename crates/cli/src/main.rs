//! Wardly CLI - Account and session management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and log in
//! wardly register -e ana@wardly.app -p secret -u Ana
//!
//! # Log in to an existing account
//! wardly login -e ana@wardly.app -p secret
//!
//! # Show the logged-in account and the current view
//! wardly whoami
//! wardly view
//!
//! # Edit or delete the logged-in account
//! wardly profile edit -u "Ana B" --avatar "data:image/png;base64,..."
//! wardly profile delete --yes
//!
//! # Wardrobe dashboard
//! wardly items count
//! wardly items clear
//!
//! # Log out
//! wardly logout
//! ```
//!
//! State is kept in the file named by `WARDLY_DATA_FILE` (see
//! [`wardly_app::config`]), so every invocation picks up the session left by
//! the previous one.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wardly_app::WardlyConfig;

mod commands;

#[derive(Parser)]
#[command(name = "wardly")]
#[command(author, version, about = "Wardly account tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Display name (defaults to the part of the email before @)
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Log in to an existing account
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out
    Logout,
    /// Show the logged-in account
    Whoami,
    /// Show the view the app would open on
    View,
    /// Manage the logged-in account
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Wardrobe item dashboard
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Change username or avatar
    Edit {
        /// New display name
        #[arg(short, long)]
        username: Option<String>,

        /// New avatar (data URL)
        #[arg(long, conflicts_with = "clear_avatar")]
        avatar: Option<String>,

        /// Remove the avatar
        #[arg(long)]
        clear_avatar: bool,
    },
    /// Delete the account and log out
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ItemsAction {
    /// Show how many items are stored
    Count,
    /// Remove all stored items
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = WardlyConfig::from_env()?;
    tracing::debug!(data_file = %config.data_file.display(), "Loaded configuration");

    match cli.command {
        Commands::Register {
            email,
            password,
            username,
        } => commands::account::register(&config, email, password, username)?,
        Commands::Login { email, password } => {
            commands::account::login(&config, &email, &password)?;
        }
        Commands::Logout => commands::account::logout(&config)?,
        Commands::Whoami => commands::account::whoami(&config)?,
        Commands::View => commands::account::view(&config)?,
        Commands::Profile { action } => match action {
            ProfileAction::Edit {
                username,
                avatar,
                clear_avatar,
            } => commands::profile::edit(&config, username, avatar, clear_avatar)?,
            ProfileAction::Delete { yes } => commands::profile::delete(&config, yes)?,
        },
        Commands::Items { action } => match action {
            ItemsAction::Count => commands::items::count(&config)?,
            ItemsAction::Clear => commands::items::clear(&config)?,
        },
    }
    Ok(())
}
