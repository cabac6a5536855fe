//! Account repository implementations.

use std::cell::{Cell, RefCell};

use wardly_core::Account;

use super::AccountRepository;
use crate::storage::{KeyValueStore, StorageError};

/// Account list stored as a JSON array under one key of a [`KeyValueStore`].
pub struct LocalAccountRepository<'a, S: KeyValueStore> {
    store: &'a S,
    key: String,
}

impl<'a, S: KeyValueStore> LocalAccountRepository<'a, S> {
    /// Create a repository over `store`, using `key` for the list.
    #[must_use]
    pub fn new(store: &'a S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The key the list is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStore> AccountRepository for LocalAccountRepository<'_, S> {
    fn load(&self) -> Result<Vec<Account>, StorageError> {
        let Some(text) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<Vec<Account>>>(&text) {
            Ok(accounts) => Ok(accounts.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Stored account list is malformed, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, accounts: &[Account]) -> Result<(), StorageError> {
        let text = serde_json::to_string(accounts)?;
        self.store.set(&self.key, &text)?;
        tracing::debug!(key = %self.key, count = accounts.len(), "Saved account list");
        Ok(())
    }
}

/// In-memory account list for tests.
///
/// Counts `save` calls so tests can tell a rejected operation from one that
/// rewrote the list with the same contents.
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    accounts: RefCell<Vec<Account>>,
    saves: Cell<usize>,
}

impl InMemoryAccounts {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding `accounts`.
    #[must_use]
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RefCell::new(accounts),
            saves: Cell::new(0),
        }
    }

    /// Snapshot of the current list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.borrow().clone()
    }

    /// Number of times `save` has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl AccountRepository for InMemoryAccounts {
    fn load(&self) -> Result<Vec<Account>, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, accounts: &[Account]) -> Result<(), StorageError> {
        *self.accounts.borrow_mut() = accounts.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<R: AccountRepository + ?Sized> AccountRepository for &R {
    fn load(&self) -> Result<Vec<Account>, StorageError> {
        (**self).load()
    }

    fn save(&self, accounts: &[Account]) -> Result<(), StorageError> {
        (**self).save(accounts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wardly_core::{Email, NewAccount};

    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "wardly_users";

    fn account(email: &str) -> Account {
        NewAccount::new(email, "p").into_account(Email::parse(email).unwrap())
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        let repo = LocalAccountRepository::new(&store, KEY);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = MemoryStore::new();
        let repo = LocalAccountRepository::new(&store, KEY);
        let list = vec![account("b@x.com"), account("a@x.com")];

        repo.save(&list).unwrap();
        assert_eq!(repo.load().unwrap(), list);
    }

    #[test]
    fn test_saved_text_is_json_array() {
        let store = MemoryStore::new();
        let repo = LocalAccountRepository::new(&store, KEY);
        repo.save(&[account("a@x.com")]).unwrap();

        assert_eq!(
            store.raw(KEY).unwrap(),
            r#"[{"username":"a","email":"a@x.com","password":"p","avatar":null}]"#
        );
    }

    #[test]
    fn test_malformed_text_loads_empty() {
        for raw in ["not json", "{\"a\":1}", "[1,2,3]", ""] {
            let store = MemoryStore::with_entries([(KEY, raw)]);
            let repo = LocalAccountRepository::new(&store, KEY);
            assert!(repo.load().unwrap().is_empty(), "input: {raw:?}");
        }
    }

    #[test]
    fn test_null_loads_empty() {
        let store = MemoryStore::with_entries([(KEY, "null")]);
        let repo = LocalAccountRepository::new(&store, KEY);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_counts_saves() {
        let repo = InMemoryAccounts::new();
        repo.save(&[account("a@x.com")]).unwrap();
        repo.save(&[]).unwrap();
        assert_eq!(repo.save_count(), 2);
        assert!(repo.snapshot().is_empty());
    }
}
