//! Account service.
//!
//! Registration, login, profile edits and deletion over an
//! [`AccountRepository`]. Each call loads the whole list, works on it in
//! memory and, if anything changed, saves the whole list back.

mod error;

pub use error::AccountError;

use wardly_core::{Account, AccountPatch, Email, NewAccount};

use crate::repository::AccountRepository;

/// Account store.
///
/// Stateless apart from the repository it wraps; nothing is cached between
/// calls.
pub struct AccountStore<R> {
    repo: R,
}

impl<R: AccountRepository> AccountStore<R> {
    /// Create a new account store.
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Get a reference to the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repo
    }

    /// Register a new account.
    ///
    /// The username falls back to the email local part when missing or
    /// empty. Emails are compared exactly, so `A@x.com` and `a@x.com` can
    /// both be registered.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidEmail` if the email is empty.
    /// Returns `AccountError::DuplicateEmail` if the email is already stored;
    /// the stored list is left untouched.
    pub fn register(&self, candidate: NewAccount) -> Result<Account, AccountError> {
        let email = Email::parse(&candidate.email)?;

        let mut accounts = self.repo.load()?;
        if accounts.iter().any(|a| a.email == email) {
            tracing::debug!(email = %email, "Registration rejected, email in use");
            return Err(AccountError::DuplicateEmail);
        }

        let account = candidate.into_account(email);
        accounts.push(account.clone());
        self.repo.save(&accounts)?;

        tracing::info!(
            email = %account.email,
            username = %account.username,
            "Account registered"
        );
        Ok(account)
    }

    /// Find the first account matching both email and password.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidCredentials` if no account matches.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        let account = self
            .repo
            .load()?
            .into_iter()
            .find(|a| a.email.matches(email) && a.password.matches(password));

        match account {
            Some(account) => {
                tracing::debug!(email = %account.email, "Login succeeded");
                Ok(account)
            }
            None => {
                tracing::debug!(email, "Login failed");
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Apply `patch` to the account stored under `email`.
    ///
    /// Returns the record as stored after the update.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound` if no account has this email.
    pub fn update_profile(&self, email: &str, patch: &AccountPatch) -> Result<Account, AccountError> {
        let mut accounts = self.repo.load()?;
        let slot = accounts
            .iter_mut()
            .find(|a| a.email.matches(email))
            .ok_or(AccountError::NotFound)?;

        let updated = patch.apply(slot);
        slot.clone_from(&updated);
        self.repo.save(&accounts)?;

        tracing::info!(email, "Profile updated");
        Ok(updated)
    }

    /// Remove every account stored under `email`.
    ///
    /// Succeeds when nothing matches. The session is not touched; callers
    /// holding this account as their session must clear it themselves.
    ///
    /// Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the list cannot be read or written.
    pub fn delete_account(&self, email: &str) -> Result<usize, AccountError> {
        let mut accounts = self.repo.load()?;
        let before = accounts.len();
        accounts.retain(|a| !a.email.matches(email));
        let removed = before - accounts.len();
        self.repo.save(&accounts)?;

        tracing::info!(email, removed, "Account deleted");
        Ok(removed)
    }

    /// Look up an account by email.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the list cannot be read.
    pub fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self
            .repo
            .load()?
            .into_iter()
            .find(|a| a.email.matches(email)))
    }

    /// All stored accounts in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the list cannot be read.
    pub fn accounts(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.repo.load()?)
    }
}
