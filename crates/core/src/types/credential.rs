//! Password credential type.
//!
//! Wardly stores passwords as plain text next to the account record. This
//! wrapper only keeps them out of `Debug` output and log lines.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A plaintext account password.
///
/// Serialized as a bare JSON string so stored records keep the
/// `{"password": "..."}` shape.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Exact comparison against a login attempt.
    #[must_use]
    pub fn matches(&self, attempt: &str) -> bool {
        self.0 == attempt
    }

    /// Get the password text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(password.to_owned())
    }
}
