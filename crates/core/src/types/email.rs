//! Email address type.
//!
//! The email is the only key an account has, so this type is compared
//! byte-for-byte: `A@x.com` and `a@x.com` are different accounts.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
}

/// An email address identifying one account.
///
/// Any non-empty text is accepted: the address is a lookup key, not
/// something Wardly ever sends mail to. Deserialization does not check even
/// that, so records already in storage are taken as they were written.
///
/// ## Examples
///
/// ```
/// use wardly_core::Email;
///
/// let email = Email::parse("ana@wardly.app").unwrap();
/// assert_eq!(email.local_part(), "ana");
///
/// assert_eq!(Email::parse("bob").unwrap().local_part(), "bob");
/// assert!(Email::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns everything before the first `@`, or the whole address when
    /// it has none.
    ///
    /// Used as the default username when none is given at registration.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }

    /// Exact, case-sensitive comparison against raw input.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
