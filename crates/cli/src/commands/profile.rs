//! Profile page commands.

use wardly_app::{Wardly, WardlyConfig};
use wardly_core::AccountPatch;

use super::{CommandError, open_store};

/// Change the username and/or avatar of the logged-in account.
pub fn edit(
    config: &WardlyConfig,
    username: Option<String>,
    avatar: Option<String>,
    clear_avatar: bool,
) -> Result<(), CommandError> {
    let patch = AccountPatch {
        username,
        avatar: if clear_avatar { Some(None) } else { avatar.map(Some) },
    };
    if patch.is_empty() {
        tracing::warn!("Nothing to change. Pass --username, --avatar or --clear-avatar.");
        return Ok(());
    }

    let store = open_store(config);
    let mut app = Wardly::open(&store, &config.keys)?;
    let account = app.save_profile(&patch)?;

    tracing::info!("Profile saved: {} ({})", account.username, account.email);
    Ok(())
}

/// Delete the logged-in account and log out.
pub fn delete(config: &WardlyConfig, confirmed: bool) -> Result<(), CommandError> {
    if !confirmed {
        return Err(CommandError::NotConfirmed("delete the account"));
    }

    let store = open_store(config);
    let mut app = Wardly::open(&store, &config.keys)?;
    let email = app
        .current_account()
        .map(|account| account.email.to_string())
        .unwrap_or_default();

    app.delete_account()?;
    tracing::info!("Account {email} deleted");
    Ok(())
}
