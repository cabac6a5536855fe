//! CLI command implementations.

pub mod account;
pub mod items;
pub mod profile;

use thiserror::Error;
use wardly_app::{AccountError, FileStore, WardlyConfig};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Account or session operation failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// A destructive command was run without confirmation.
    #[error("refusing to {0} without --yes")]
    NotConfirmed(&'static str),
}

/// Open the storage file named by the configuration.
fn open_store(config: &WardlyConfig) -> FileStore {
    FileStore::new(&config.data_file)
}
