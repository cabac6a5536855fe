//! Application state and view transitions.
//!
//! [`Wardly`] is what the views talk to. It owns the current view and the
//! in-memory copy of the session, and keeps the persisted session in step
//! with the account list after every account operation.

use wardly_core::{Account, AccountPatch, NewAccount, Route, View};

use crate::config::StorageKeys;
use crate::items::ItemCounter;
use crate::repository::LocalAccountRepository;
use crate::services::accounts::{AccountError, AccountStore};
use crate::session::SessionHolder;
use crate::storage::KeyValueStore;

/// Application state over one key-value store.
pub struct Wardly<'a, S: KeyValueStore> {
    accounts: AccountStore<LocalAccountRepository<'a, S>>,
    session: SessionHolder<'a, S>,
    items: ItemCounter<'a, S>,
    current: Option<Account>,
    view: View,
}

impl<'a, S: KeyValueStore> Wardly<'a, S> {
    /// Open the application, restoring any persisted session.
    ///
    /// Starts on [`View::Home`] when a session was restored, otherwise on
    /// [`View::Unauthenticated`].
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the session cannot be read.
    pub fn open(store: &'a S, keys: &StorageKeys) -> Result<Self, AccountError> {
        let session = SessionHolder::new(store, keys.session.as_str());
        let current = session.get_session()?;
        let view = if current.is_some() {
            View::Home
        } else {
            View::Unauthenticated
        };

        tracing::debug!(%view, "Opened Wardly");

        Ok(Self {
            accounts: AccountStore::new(LocalAccountRepository::new(store, keys.accounts.as_str())),
            session,
            items: ItemCounter::new(store, keys.items.as_str()),
            current,
            view,
        })
    }

    /// The view currently shown.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// The logged-in account, if any.
    #[must_use]
    pub const fn current_account(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// The account store, for lookups that bypass the views.
    #[must_use]
    pub const fn accounts(&self) -> &AccountStore<LocalAccountRepository<'a, S>> {
        &self.accounts
    }

    // =========================================================================
    // Authentication screen
    // =========================================================================

    /// Log in and go to the home view.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidCredentials` if no account matches; the
    /// view and session are unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Account, AccountError> {
        let account = self.accounts.authenticate(email, password)?;
        self.enter(account)
    }

    /// Register a new account, log it in and go to the home view.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::DuplicateEmail` if the email is taken, or
    /// `AccountError::InvalidEmail` if it is empty; the view and session are
    /// unchanged.
    pub fn register(&mut self, candidate: NewAccount) -> Result<&Account, AccountError> {
        let account = self.accounts.register(candidate)?;
        self.enter(account)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Follow a bottom navigation link.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotAuthenticated` without a session.
    pub fn navigate(&mut self, route: Route) -> Result<View, AccountError> {
        self.require_session()?;
        self.view = route.view();
        Ok(self.view)
    }

    /// Leave the picture upload view after a picture was added.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotAuthenticated` without a session.
    pub fn picture_added(&mut self) -> Result<View, AccountError> {
        self.navigate(Route::Home)
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Save profile changes to the stored account and the session.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotAuthenticated` without a session.
    /// Returns `AccountError::NotFound` if the session account is no longer
    /// stored; the session is left as it was.
    pub fn save_profile(&mut self, patch: &AccountPatch) -> Result<&Account, AccountError> {
        let email = self.require_session()?.email.clone();
        let updated = self.accounts.update_profile(email.as_str(), patch)?;
        self.session.set_session(Some(&updated))?;
        Ok(self.current.insert(updated))
    }

    /// Delete the logged-in account and log out.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotAuthenticated` without a session.
    pub fn delete_account(&mut self) -> Result<(), AccountError> {
        let email = self.require_session()?.email.clone();
        self.accounts.delete_account(email.as_str())?;
        self.leave()
    }

    /// Log out.
    ///
    /// Logging out without a session is a no-op apart from rewriting the
    /// absent marker.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if the session cannot be written.
    pub fn logout(&mut self) -> Result<(), AccountError> {
        self.leave()
    }

    /// Number of wardrobe items, shown on the profile dashboard.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotAuthenticated` without a session.
    pub fn item_count(&self) -> Result<usize, AccountError> {
        self.require_session()?;
        Ok(self.items.count()?)
    }

    /// Remove every wardrobe item.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotAuthenticated` without a session.
    pub fn clear_items(&self) -> Result<(), AccountError> {
        self.require_session()?;
        Ok(self.items.clear()?)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_session(&self) -> Result<&Account, AccountError> {
        self.current.as_ref().ok_or(AccountError::NotAuthenticated)
    }

    /// Persist `account` as the session, then switch to it.
    fn enter(&mut self, account: Account) -> Result<&Account, AccountError> {
        self.session.set_session(Some(&account))?;
        self.view = View::Home;
        tracing::info!(email = %account.email, "Logged in");
        Ok(self.current.insert(account))
    }

    /// Persist the absent session, then switch to the auth screen.
    fn leave(&mut self) -> Result<(), AccountError> {
        self.session.set_session(None)?;
        if let Some(account) = self.current.take() {
            tracing::info!(email = %account.email, "Logged out");
        }
        self.view = View::Unauthenticated;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open(store: &MemoryStore) -> Wardly<'_, MemoryStore> {
        Wardly::open(store, &StorageKeys::default()).unwrap()
    }

    #[test]
    fn test_starts_unauthenticated_without_session() {
        let store = MemoryStore::new();
        let app = open(&store);
        assert_eq!(app.view(), View::Unauthenticated);
        assert!(app.current_account().is_none());
    }

    #[test]
    fn test_register_enters_home_and_persists_session() {
        let store = MemoryStore::new();
        let mut app = open(&store);
        app.register(NewAccount::new("a@x.com", "p")).unwrap();

        assert_eq!(app.view(), View::Home);
        assert_eq!(app.current_account().unwrap().username, "a");

        let reopened = open(&store);
        assert_eq!(reopened.view(), View::Home);
        assert_eq!(reopened.current_account(), app.current_account());
    }

    #[test]
    fn test_failed_login_keeps_state() {
        let store = MemoryStore::new();
        let mut app = open(&store);
        assert!(matches!(
            app.login("a@x.com", "p"),
            Err(AccountError::InvalidCredentials)
        ));
        assert_eq!(app.view(), View::Unauthenticated);
        assert_eq!(store.raw("wardly_user"), None);
    }

    #[test]
    fn test_navigation_requires_session() {
        let store = MemoryStore::new();
        let mut app = open(&store);
        assert!(matches!(
            app.navigate(Route::Profile),
            Err(AccountError::NotAuthenticated)
        ));

        app.register(NewAccount::new("a@x.com", "p")).unwrap();
        assert_eq!(app.navigate(Route::Add).unwrap(), View::AddPicture);
        assert_eq!(app.picture_added().unwrap(), View::Home);
        assert_eq!(app.navigate(Route::Profile).unwrap(), View::Profile);
    }

    #[test]
    fn test_save_profile_updates_store_and_session() {
        let store = MemoryStore::new();
        let mut app = open(&store);
        app.register(NewAccount::new("a@x.com", "p")).unwrap();

        app.save_profile(&AccountPatch::default().username("Ana"))
            .unwrap();

        let stored = app.accounts().find_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(stored.username, "Ana");
        assert_eq!(app.current_account(), Some(&stored));
        assert_eq!(open(&store).current_account(), Some(&stored));
    }

    #[test]
    fn test_delete_account_clears_session() {
        let store = MemoryStore::new();
        let mut app = open(&store);
        app.register(NewAccount::new("a@x.com", "p")).unwrap();
        app.navigate(Route::Profile).unwrap();

        app.delete_account().unwrap();

        assert_eq!(app.view(), View::Unauthenticated);
        assert!(app.current_account().is_none());
        assert!(app.accounts().accounts().unwrap().is_empty());
        assert_eq!(store.raw("wardly_user").as_deref(), Some("null"));
    }

    #[test]
    fn test_logout_then_login_returns_home() {
        let store = MemoryStore::new();
        let mut app = open(&store);
        app.register(NewAccount::new("a@x.com", "p")).unwrap();
        app.navigate(Route::Profile).unwrap();
        app.logout().unwrap();
        assert_eq!(app.view(), View::Unauthenticated);

        app.login("a@x.com", "p").unwrap();
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn test_items_dashboard() {
        let store = MemoryStore::with_entries([("wardly_items", "[1,2,3]")]);
        let mut app = open(&store);
        assert!(matches!(app.item_count(), Err(AccountError::NotAuthenticated)));

        app.register(NewAccount::new("a@x.com", "p")).unwrap();
        assert_eq!(app.item_count().unwrap(), 3);
        app.clear_items().unwrap();
        assert_eq!(app.item_count().unwrap(), 0);
    }
}
