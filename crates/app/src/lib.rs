//! Wardly application library.
//!
//! Everything the Wardly views do with persisted state lives here:
//!
//! - [`storage`] - Text key-value backends standing in for browser local storage
//! - [`repository`] - The account list as a whole-list `load`/`save` repository
//! - [`services::accounts`] - Registration, login, profile edits and deletion
//! - [`session`] - The mirrored "current account" value
//! - [`items`] - The wardrobe item counter shown on the profile dashboard
//! - [`state`] - The [`Wardly`] facade tying the above to the view state machine
//! - [`config`] - Environment configuration for the storage file and keys
//!
//! # Single writer
//!
//! Every operation is a read-modify-write of a whole value. Nothing here
//! locks: callers must not run two mutating operations against the same
//! store at once, or the later write silently wins.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod items;
pub mod repository;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;

pub use config::{ConfigError, StorageKeys, WardlyConfig};
pub use services::accounts::{AccountError, AccountStore};
pub use state::Wardly;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
