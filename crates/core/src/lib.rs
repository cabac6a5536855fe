//! Wardly Core - Shared types library.
//!
//! This crate provides the domain types used across all Wardly components:
//! - `wardly-app` - Account store, session holder and view state machine
//! - `wardly-cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no storage access and no logging.
//! Everything here is plain data with serde support, so the same records
//! can be written to any key-value backend.
//!
//! # Modules
//!
//! - [`types`] - Account records, credentials, email addresses and views

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
