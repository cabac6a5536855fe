//! Integration tests for the whole app over the file-backed store.
//!
//! Each `Wardly::open` stands for a page reload: nothing carries over
//! except what was written to the file.

use tempfile::TempDir;
use wardly_app::{AccountError, FileStore, KeyValueStore, StorageKeys, Wardly, WardlyConfig};
use wardly_core::{AccountPatch, NewAccount, Route, View};

fn setup() -> (FileStore, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let store = FileStore::new(dir.path().join("wardly-storage.json"));
    (store, dir)
}

#[test]
fn test_session_survives_reload() {
    let (store, _dir) = setup();
    let keys = StorageKeys::default();

    {
        let mut app = Wardly::open(&store, &keys).expect("open");
        assert_eq!(app.view(), View::Unauthenticated);
        app.register(NewAccount::new("a@x.com", "p").with_username("Ana"))
            .expect("registration");
        app.navigate(Route::Profile).expect("navigate");
    }

    let reloaded = FileStore::new(store.path());
    let app = Wardly::open(&reloaded, &keys).expect("reopen");
    assert_eq!(app.view(), View::Home);
    assert_eq!(
        app.current_account().map(|a| a.username.as_str()),
        Some("Ana")
    );
}

#[test]
fn test_full_account_lifecycle() {
    let (store, _dir) = setup();
    let keys = StorageKeys::default();

    let mut app = Wardly::open(&store, &keys).expect("open");
    app.register(NewAccount::new("a@x.com", "p"))
        .expect("registration");
    app.logout().expect("logout");

    let mut app = Wardly::open(&store, &keys).expect("reopen");
    assert_eq!(app.view(), View::Unauthenticated);
    assert!(matches!(
        app.register(NewAccount::new("a@x.com", "other")),
        Err(AccountError::DuplicateEmail)
    ));
    assert!(matches!(
        app.login("a@x.com", "other"),
        Err(AccountError::InvalidCredentials)
    ));

    app.login("a@x.com", "p").expect("login");
    app.save_profile(&AccountPatch::default().avatar("data:x"))
        .expect("save profile");
    app.delete_account().expect("delete");

    let app = Wardly::open(&store, &keys).expect("reopen");
    assert_eq!(app.view(), View::Unauthenticated);
    assert!(app.accounts().accounts().expect("list").is_empty());
    assert_eq!(store.get("wardly_user").expect("read").as_deref(), Some("null"));
}

#[test]
fn test_custom_keys_are_isolated() {
    let (store, _dir) = setup();
    let wardly_keys = StorageKeys::default();
    let legacy_keys = WardlyConfig::from_lookup(|key| match key {
        "WARDLY_ACCOUNTS_KEY" => Some("users".to_owned()),
        "WARDLY_SESSION_KEY" => Some("loggedIn".to_owned()),
        _ => None,
    })
    .expect("config")
    .keys;

    let mut app = Wardly::open(&store, &wardly_keys).expect("open");
    app.register(NewAccount::new("a@x.com", "p"))
        .expect("registration");

    let mut legacy = Wardly::open(&store, &legacy_keys).expect("open legacy");
    assert_eq!(legacy.view(), View::Unauthenticated);
    assert!(matches!(
        legacy.login("a@x.com", "p"),
        Err(AccountError::InvalidCredentials)
    ));
}

#[test]
fn test_items_dashboard_over_file() {
    let (store, _dir) = setup();
    store
        .set("wardly_items", r#"[{"name":"coat"},{"name":"scarf"}]"#)
        .expect("seed items");

    let mut app = Wardly::open(&store, &StorageKeys::default()).expect("open");
    app.register(NewAccount::new("a@x.com", "p"))
        .expect("registration");
    assert_eq!(app.item_count().expect("count"), 2);

    app.clear_items().expect("clear");
    assert_eq!(app.item_count().expect("count"), 0);
    assert_eq!(store.get("wardly_items").expect("read"), None);
}
