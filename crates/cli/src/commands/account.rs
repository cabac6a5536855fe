//! Login screen commands.
//!
//! # Usage
//!
//! ```bash
//! wardly register -e ana@wardly.app -p secret
//! wardly login -e ana@wardly.app -p secret
//! wardly whoami
//! wardly logout
//! ```

use wardly_app::{Wardly, WardlyConfig};
use wardly_core::NewAccount;

use super::{CommandError, open_store};

/// Register a new account and log it in.
pub fn register(
    config: &WardlyConfig,
    email: String,
    password: String,
    username: Option<String>,
) -> Result<(), CommandError> {
    let store = open_store(config);
    let mut app = Wardly::open(&store, &config.keys)?;

    let mut candidate = NewAccount::new(email, password);
    if let Some(username) = username {
        candidate = candidate.with_username(username);
    }

    let account = app.register(candidate)?;
    tracing::info!(
        "Account created! Welcome, {} ({})",
        account.username,
        account.email
    );
    Ok(())
}

/// Log in to an existing account.
pub fn login(config: &WardlyConfig, email: &str, password: &str) -> Result<(), CommandError> {
    let store = open_store(config);
    let mut app = Wardly::open(&store, &config.keys)?;

    let account = app.login(email, password)?;
    tracing::info!("Logged in as {} ({})", account.username, account.email);
    Ok(())
}

/// Clear the session.
pub fn logout(config: &WardlyConfig) -> Result<(), CommandError> {
    let store = open_store(config);
    let mut app = Wardly::open(&store, &config.keys)?;

    let was_logged_in = app.current_account().is_some();
    app.logout()?;
    if was_logged_in {
        tracing::info!("Logged out");
    } else {
        tracing::info!("Not logged in");
    }
    Ok(())
}

/// Show the logged-in account.
pub fn whoami(config: &WardlyConfig) -> Result<(), CommandError> {
    let store = open_store(config);
    let app = Wardly::open(&store, &config.keys)?;

    match app.current_account() {
        Some(account) => {
            tracing::info!("Username: {}", account.username);
            tracing::info!("Email: {}", account.email);
            tracing::info!(
                "Avatar: {}",
                if account.avatar.is_some() { "set" } else { "none" }
            );
        }
        None => tracing::info!("Not logged in"),
    }
    Ok(())
}

/// Show the view the app opens on.
///
/// The view is not persisted between runs, so this is always `home` with a
/// stored session and `unauthenticated` without one. Navigation between
/// pages only exists inside a running [`Wardly`].
pub fn view(config: &WardlyConfig) -> Result<(), CommandError> {
    let store = open_store(config);
    let app = Wardly::open(&store, &config.keys)?;
    tracing::info!("View: {}", app.view());
    Ok(())
}
