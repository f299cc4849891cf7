//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STYLEHUB_STORAGE` - Storage backend, `file` or `memory` (default: file)
//! - `STYLEHUB_DATA_DIR` - Directory for the file backend (default: .stylehub)
//! - `STYLEHUB_CART_KEY` - Storage key for cart lines (default: stylehub-cart)
//! - `STYLEHUB_WISHLIST_KEY` - Storage key for wishlist entries (default: wishlist)
//! - `STYLEHUB_CATALOG_PATH` - JSON product file for the mock catalog
//! - `STYLEHUB_ORDERS_PATH` - JSON order file seeding the mock order book
//! - `STYLEHUB_REVIEWS_PATH` - JSON review file seeding the mock review store

use std::path::PathBuf;

use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::wishlist::DEFAULT_WISHLIST_KEY;

const DEFAULT_DATA_DIR: &str = ".stylehub";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("cart and wishlist cannot share the storage key `{0}`")]
    SharedStorageKey(String),
}

/// Reject a cart key equal to the wishlist key.
///
/// Both collections persist under their key in the same backend, so a shared
/// key would let each overwrite the other.
///
/// # Errors
///
/// Returns [`ConfigError::SharedStorageKey`] if the keys are equal.
pub fn check_storage_keys(cart_key: &str, wishlist_key: &str) -> Result<(), ConfigError> {
    if cart_key == wishlist_key {
        return Err(ConfigError::SharedStorageKey(cart_key.to_string()));
    }
    Ok(())
}

/// Where cart and wishlist snapshots are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// JSON files under [`StorefrontConfig::data_dir`].
    #[default]
    File,
    /// Process memory; nothing survives a restart.
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected `file` or `memory`, got `{other}`")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Storage backend for cart and wishlist
    pub storage: StorageBackend,
    /// Directory holding the file backend's JSON files
    pub data_dir: PathBuf,
    /// Storage key for cart lines
    pub cart_key: String,
    /// Storage key for wishlist entries
    pub wishlist_key: String,
    /// Product file for the mock catalog, if any
    pub catalog_path: Option<PathBuf>,
    /// Order file seeding the mock order book, if any
    pub orders_path: Option<PathBuf>,
    /// Review file seeding the mock review store, if any
    pub reviews_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            wishlist_key: DEFAULT_WISHLIST_KEY.to_string(),
            catalog_path: None,
            orders_path: None,
            reviews_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let storage = match get("STYLEHUB_STORAGE") {
            Some(raw) => raw
                .parse::<StorageBackend>()
                .map_err(|e| ConfigError::InvalidEnvVar("STYLEHUB_STORAGE".to_string(), e))?,
            None => defaults.storage,
        };
        let cart_key = get("STYLEHUB_CART_KEY").unwrap_or(defaults.cart_key);
        let wishlist_key = get("STYLEHUB_WISHLIST_KEY").unwrap_or(defaults.wishlist_key);
        check_storage_keys(&cart_key, &wishlist_key)?;

        Ok(Self {
            storage,
            data_dir: get("STYLEHUB_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            cart_key,
            wishlist_key,
            catalog_path: get("STYLEHUB_CATALOG_PATH").map(PathBuf::from),
            orders_path: get("STYLEHUB_ORDERS_PATH").map(PathBuf::from),
            reviews_path: get("STYLEHUB_REVIEWS_PATH").map(PathBuf::from),
        })
    }
}
