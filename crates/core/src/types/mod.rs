//! Core types for Wardly.
//!
//! This module provides type-safe wrappers for the account domain.

pub mod account;
pub mod credential;
pub mod email;
pub mod view;

pub use account::{Account, AccountPatch, NewAccount};
pub use credential::Password;
pub use email::{Email, EmailError};
pub use view::{Route, View};
