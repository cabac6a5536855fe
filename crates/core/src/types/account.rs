//! Account records and the inputs that create or change them.

use serde::{Deserialize, Serialize};

use super::credential::Password;
use super::email::Email;

/// A stored account record.
///
/// The serialized form is `{"username", "email", "password", "avatar"}`,
/// with `avatar` written as `null` when unset. The session holds a copy of
/// one of these, not a reference into the account list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name.
    pub username: String,
    /// Unique key of the record.
    pub email: Email,
    /// Plaintext password.
    pub password: Password,
    /// Avatar image, usually a data URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A registration request.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Requested username. Empty or missing falls back to the email local part.
    pub username: Option<String>,
    /// Email as typed; must not be empty.
    pub email: String,
    /// Password as typed.
    pub password: Password,
}

impl NewAccount {
    /// Create a registration request without a username.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            username: None,
            email: email.into(),
            password: password.into(),
        }
    }

    /// Set the requested username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Build the record to store under the parsed `email`.
    #[must_use]
    pub fn into_account(self, email: Email) -> Account {
        let username = match self.username {
            Some(name) if !name.is_empty() => name,
            _ => email.local_part().to_owned(),
        };

        Account {
            username,
            email,
            password: self.password,
            avatar: None,
        }
    }
}

/// Profile fields to change on an existing account.
///
/// Fields left as `None` keep their stored value. The email is the record
/// key and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    /// New username.
    pub username: Option<String>,
    /// `Some(Some(_))` sets the avatar, `Some(None)` clears it.
    pub avatar: Option<Option<String>>,
}

impl AccountPatch {
    /// Change the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the avatar.
    #[must_use]
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(Some(avatar.into()));
        self
    }

    /// Remove the avatar.
    #[must_use]
    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Some(None);
        self
    }

    /// Whether applying this patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.avatar.is_none()
    }

    /// Return `account` with this patch applied.
    #[must_use]
    pub fn apply(&self, account: &Account) -> Account {
        let mut patched = account.clone();
        if let Some(username) = &self.username {
            patched.username.clone_from(username);
        }
        if let Some(avatar) = &self.avatar {
            patched.avatar.clone_from(avatar);
        }
        patched
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn account() -> Account {
        NewAccount::new("a@x.com", "p").into_account(Email::parse("a@x.com").unwrap())
    }

    #[test]
    fn test_username_defaults_to_local_part() {
        let acc = account();
        assert_eq!(acc.username, "a");
        assert_eq!(acc.avatar, None);
    }

    #[test]
    fn test_empty_username_defaults_to_local_part() {
        let acc = NewAccount::new("zoe@x.com", "p")
            .with_username("")
            .into_account(Email::parse("zoe@x.com").unwrap());
        assert_eq!(acc.username, "zoe");
    }

    #[test]
    fn test_explicit_username_is_kept() {
        let acc = NewAccount::new("zoe@x.com", "p")
            .with_username("Zoe")
            .into_account(Email::parse("zoe@x.com").unwrap());
        assert_eq!(acc.username, "Zoe");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(account()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "a",
                "email": "a@x.com",
                "password": "p",
                "avatar": null
            })
        );
    }

    #[test]
    fn test_missing_avatar_field_reads_as_none() {
        let acc: Account =
            serde_json::from_str(r#"{"username":"a","email":"a@x.com","password":"p"}"#).unwrap();
        assert_eq!(acc.avatar, None);
    }

    #[test]
    fn test_patch_changes_only_given_fields() {
        let acc = account();
        let patched = AccountPatch::default().username("Ana").apply(&acc);
        assert_eq!(patched.username, "Ana");
        assert_eq!(patched.email, acc.email);
        assert_eq!(patched.password, acc.password);
        assert_eq!(patched.avatar, None);
    }

    #[test]
    fn test_patch_sets_and_clears_avatar() {
        let acc = account();
        let with_avatar = AccountPatch::default()
            .avatar("data:image/png;base64,AAAA")
            .apply(&acc);
        assert_eq!(
            with_avatar.avatar.as_deref(),
            Some("data:image/png;base64,AAAA")
        );

        let cleared = AccountPatch::default().clear_avatar().apply(&with_avatar);
        assert_eq!(cleared.avatar, None);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let patch = AccountPatch::default().username("Ana").avatar("x");
        let once = patch.apply(&account());
        let twice = patch.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_patch() {
        assert!(AccountPatch::default().is_empty());
        assert!(!AccountPatch::default().clear_avatar().is_empty());
    }
}
