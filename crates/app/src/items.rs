//! Wardrobe item counter for the profile dashboard.

use crate::storage::{KeyValueStore, StorageError};

/// Reads the length of the stored item list and clears it.
///
/// Item contents are never inspected; any JSON array counts.
pub struct ItemCounter<'a, S: KeyValueStore> {
    store: &'a S,
    key: String,
}

impl<'a, S: KeyValueStore> ItemCounter<'a, S> {
    /// Create an item counter over `store`, using `key`.
    #[must_use]
    pub fn new(store: &'a S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Number of stored items. Missing or malformed text counts as zero.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub fn count(&self) -> Result<usize, StorageError> {
        let Some(text) = self.store.get(&self.key)? else {
            return Ok(0);
        };

        match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&text) {
            Ok(items) => Ok(items.map_or(0, |items| items.len())),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored item list is malformed");
                Ok(0)
            }
        }
    }

    /// Remove every stored item.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        tracing::info!(key = %self.key, "Items cleared");
        Ok(())
    }
}
