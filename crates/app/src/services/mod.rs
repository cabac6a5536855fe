//! Services built on top of the storage layer.

pub mod accounts;
