//! Account error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during account and session operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Registration with an email that is already stored.
    #[error("email is already registered")]
    DuplicateEmail,

    /// No account matches the email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No account with the given email.
    #[error("account not found")]
    NotFound,

    /// Empty email at registration.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] wardly_core::EmailError),

    /// The operation needs a logged-in account.
    #[error("not logged in")]
    NotAuthenticated,

    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
