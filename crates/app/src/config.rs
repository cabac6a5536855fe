//! Wardly configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `WARDLY_DATA_FILE` - Storage file path (default: `wardly-storage.json`)
//! - `WARDLY_ACCOUNTS_KEY` - Key of the account list (default: `wardly_users`)
//! - `WARDLY_SESSION_KEY` - Key of the current session (default: `wardly_user`)
//! - `WARDLY_ITEMS_KEY` - Key of the wardrobe item list (default: `wardly_items`)

use std::path::PathBuf;

use thiserror::Error;

/// Default storage key names.
pub mod keys {
    /// Key for the serialized account list.
    pub const ACCOUNTS: &str = "wardly_users";

    /// Key for the serialized current session.
    pub const SESSION: &str = "wardly_user";

    /// Key for the serialized wardrobe item list.
    pub const ITEMS: &str = "wardly_items";
}

/// Default storage file path.
pub const DEFAULT_DATA_FILE: &str = "wardly-storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storage key names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key of the account list
    pub accounts: String,
    /// Key of the current session
    pub session: String,
    /// Key of the wardrobe item list
    pub items: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            accounts: keys::ACCOUNTS.to_owned(),
            session: keys::SESSION.to_owned(),
            items: keys::ITEMS.to_owned(),
        }
    }
}

/// Wardly application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardlyConfig {
    /// Path of the file-backed key-value store
    pub data_file: PathBuf,
    /// Storage key names
    pub keys: StorageKeys,
}

impl WardlyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a key is empty or two keys collide.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a key is empty or two keys collide.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let data_file = PathBuf::from(get("WARDLY_DATA_FILE", DEFAULT_DATA_FILE));
        if data_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "WARDLY_DATA_FILE".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        let storage_keys = StorageKeys {
            accounts: get_key(&get, "WARDLY_ACCOUNTS_KEY", keys::ACCOUNTS)?,
            session: get_key(&get, "WARDLY_SESSION_KEY", keys::SESSION)?,
            items: get_key(&get, "WARDLY_ITEMS_KEY", keys::ITEMS)?,
        };
        validate_distinct(&storage_keys)?;

        Ok(Self {
            data_file,
            keys: storage_keys,
        })
    }
}

impl Default for WardlyConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            keys: StorageKeys::default(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a storage key name, rejecting blank values.
fn get_key(
    get: &impl Fn(&str, &str) -> String,
    var: &str,
    default: &str,
) -> Result<String, ConfigError> {
    let value = get(var, default);
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var.to_owned(),
            "must not be empty".to_owned(),
        ));
    }
    Ok(value)
}

/// Two components sharing a key would overwrite each other's data.
fn validate_distinct(keys: &StorageKeys) -> Result<(), ConfigError> {
    let pairs = [
        ("WARDLY_SESSION_KEY", &keys.session, &keys.accounts),
        ("WARDLY_ITEMS_KEY", &keys.items, &keys.accounts),
        ("WARDLY_ITEMS_KEY", &keys.items, &keys.session),
    ];
    for (var, a, b) in pairs {
        if a == b {
            return Err(ConfigError::InvalidEnvVar(
                var.to_owned(),
                format!("'{a}' is already used by another key"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WardlyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, WardlyConfig::default());
        assert_eq!(config.keys.accounts, "wardly_users");
        assert_eq!(config.keys.session, "wardly_user");
        assert_eq!(config.keys.items, "wardly_items");
    }

    #[test]
    fn test_overrides() {
        let config = WardlyConfig::from_lookup(lookup(&[
            ("WARDLY_DATA_FILE", "/tmp/w.json"),
            ("WARDLY_ACCOUNTS_KEY", "users"),
            ("WARDLY_SESSION_KEY", "loggedIn"),
        ]))
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/w.json"));
        assert_eq!(config.keys.accounts, "users");
        assert_eq!(config.keys.session, "loggedIn");
        assert_eq!(config.keys.items, "wardly_items");
    }

    #[test]
    fn test_blank_key_rejected() {
        let result = WardlyConfig::from_lookup(lookup(&[("WARDLY_ITEMS_KEY", "  ")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "WARDLY_ITEMS_KEY"));
    }

    #[test]
    fn test_empty_data_file_rejected() {
        let result = WardlyConfig::from_lookup(lookup(&[("WARDLY_DATA_FILE", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_colliding_keys_rejected() {
        let result = WardlyConfig::from_lookup(lookup(&[("WARDLY_SESSION_KEY", "wardly_users")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "WARDLY_SESSION_KEY"));
    }
}
