//! Integration tests for Wardly.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wardly-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `account_store` - Registration, login, profile edits and deletion
//! - `session_divergence` - Session copy versus stored list
//! - `file_storage` - Whole app over the file-backed store

use wardly_app::repository::LocalAccountRepository;
use wardly_app::{AccountStore, KeyValueStore, StorageKeys};

/// Account store over `store` using the default account key.
pub fn account_store<S: KeyValueStore>(store: &S) -> AccountStore<LocalAccountRepository<'_, S>> {
    AccountStore::new(LocalAccountRepository::new(
        store,
        StorageKeys::default().accounts,
    ))
}
