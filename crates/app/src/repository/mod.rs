//! Account list persistence.
//!
//! The account list is always read and written as a whole. There is no
//! per-record access and no indexing: at the sizes Wardly deals with a
//! linear scan over the loaded list is all any operation needs.
//!
//! # Single writer
//!
//! Implementations do not detect concurrent modification. Two overlapping
//! `load` → modify → `save` cycles lose the earlier write. Callers must
//! serialize mutating operations; if that stops being true the minimal
//! upgrade is a versioned `save(list, expected_version)`.

mod accounts;

pub use accounts::{InMemoryAccounts, LocalAccountRepository};

use wardly_core::Account;

use crate::storage::StorageError;

/// Whole-list storage for account records.
pub trait AccountRepository {
    /// Load every stored account, in insertion order.
    ///
    /// Stored text that cannot be parsed loads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn load(&self) -> Result<Vec<Account>, StorageError>;

    /// Replace the stored list with `accounts`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be serialized or written.
    fn save(&self, accounts: &[Account]) -> Result<(), StorageError>;
}
