//! Session holder.
//!
//! The session is a copy of one account record, written to storage every
//! time it changes so a restart comes back logged in. It is not linked to
//! the account list: editing or deleting the stored account does not touch
//! the session, and vice versa.

use wardly_core::Account;

use crate::storage::{KeyValueStore, StorageError};

/// Text stored for "no session".
pub const NO_SESSION: &str = "null";

/// Persisted zero-or-one current account.
pub struct SessionHolder<'a, S: KeyValueStore> {
    store: &'a S,
    key: String,
}

impl<'a, S: KeyValueStore> SessionHolder<'a, S> {
    /// Create a session holder over `store`, using `key`.
    #[must_use]
    pub fn new(store: &'a S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Persist `account` as the current session, or the absent marker.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    pub fn set_session(&self, account: Option<&Account>) -> Result<(), StorageError> {
        let text = serde_json::to_string(&account)?;
        self.store.set(&self.key, &text)?;

        match account {
            Some(account) => tracing::debug!(email = %account.email, "Session set"),
            None => tracing::debug!("Session cleared"),
        }
        Ok(())
    }

    /// Read the last persisted session.
    ///
    /// A missing key, the absent marker, and unparseable text all read as
    /// no session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub fn get_session(&self) -> Result<Option<Account>, StorageError> {
        let Some(text) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Option<Account>>(&text) {
            Ok(account) => Ok(account),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Stored session is malformed, treating it as logged out"
                );
                Ok(None)
            }
        }
    }
}
