//! Text key-value storage.
//!
//! Wardly persists everything as serialized text under a handful of keys,
//! the same way a browser's local storage works. Values are whole
//! documents: every write replaces the previous value under that key.
//!
//! # Backends
//!
//! - [`MemoryStore`] - in-process map, used by tests and throwaway sessions
//! - [`FileStore`] - one JSON file holding every key, used by the CLI

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a storage backend.
///
/// Malformed values are not errors at this level; readers decide how to
/// treat text they cannot parse.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A synchronous text key-value store.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
