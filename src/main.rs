//! Current User CLI
//!
//! Command-line interface for inspecting and editing the stored login profile.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use current_user::config::{self, AppConfig};
use current_user::profile::decode_basic_authorization;
use current_user::utils::parsing::{mask_secret, parse_credentials};
use current_user::{CurrentUser, JsonFileStore};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Current user profile tool
#[derive(Parser, Debug)]
#[command(name = "current-user")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Store file to use instead of the configured one
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Settings file to use instead of the default config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show whether a user is logged in
    Status,

    /// Show the stored profile (secrets masked)
    Show,

    /// Store credentials and their Basic authorization token
    Login {
        /// Credentials as username:password
        credentials: String,
    },

    /// Replace the authorization token, keeping username and password
    SetToken {
        /// Opaque token value
        token: String,
    },

    /// Remove the stored profile
    Logout,

    /// Print the store file and storage key in use
    Path,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = load_settings(&args)?;

    match args.command {
        Command::Status => cmd_status(&settings),
        Command::Show => cmd_show(&settings),
        Command::Login { credentials } => cmd_login(&settings, &credentials),
        Command::SetToken { token } => cmd_set_token(&settings, &token),
        Command::Logout => cmd_logout(&settings),
        Command::Path => cmd_path(&settings),
    }
}

/// Settings from the config file with the `--store` override applied.
fn load_settings(args: &Args) -> Result<AppConfig> {
    let mut settings = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("Failed to load settings")?;

    if let Some(store) = &args.store {
        settings.store_path = Some(store.clone());
    }
    Ok(settings)
}

fn open_user(settings: &AppConfig) -> Result<CurrentUser<JsonFileStore>> {
    let store = settings.open_store().context("Failed to open store")?;
    log::debug!("Using store {}", store.path().display());
    CurrentUser::with_key(store, settings.storage_key.clone()).context("Failed to load profile")
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_status(settings: &AppConfig) -> Result<()> {
    let user = open_user(settings)?;

    if user.is_logged_in() {
        println!("Logged in as '{}'", user.profile().username);
    } else {
        println!("Not logged in");
    }
    Ok(())
}

fn cmd_show(settings: &AppConfig) -> Result<()> {
    let user = open_user(settings)?;
    let profile = user.profile();

    println!("username:             {}", profile.username);
    println!("password:             {}", mask_secret(&profile.password));
    println!(
        "authorizationEncoded: {}",
        mask_secret(&profile.authorization_encoded)
    );
    println!("loggedIn:             {}", user.is_logged_in());

    if user.is_logged_in() {
        match decode_basic_authorization(&profile.authorization_encoded) {
            Ok((token_user, _)) if token_user != profile.username => {
                println!("warning: token belongs to '{}'", token_user);
            }
            Ok(_) => {}
            Err(e) => log::debug!("Token is not a Basic token: {}", e),
        }
    }
    Ok(())
}

fn cmd_login(settings: &AppConfig, credentials: &str) -> Result<()> {
    let (username, password) = parse_credentials(credentials)?;

    let mut user = open_user(settings)?;
    user.login(&username, &password);
    user.save().context("Failed to save profile")?;

    println!("Logged in as '{}'", username);
    Ok(())
}

fn cmd_set_token(settings: &AppConfig, token: &str) -> Result<()> {
    let mut user = open_user(settings)?;
    user.update(|p| p.with_authorization(token));
    user.save().context("Failed to save profile")?;

    println!("Token updated for '{}'", user.profile().username);
    Ok(())
}

fn cmd_logout(settings: &AppConfig) -> Result<()> {
    let mut user = open_user(settings)?;
    let username = user.profile().username.clone();
    user.logout().context("Failed to remove profile")?;

    if username.is_empty() {
        println!("No stored profile");
    } else {
        println!("Logged out '{}'", username);
    }
    Ok(())
}

fn cmd_path(settings: &AppConfig) -> Result<()> {
    let path = settings
        .resolve_store_path()
        .context("Failed to resolve store path")?;

    println!("store: {}", path.display());
    println!("key:   {}", settings.storage_key);
    Ok(())
}
