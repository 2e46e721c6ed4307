//! Persistent record store.
//!
//! A thin wrapper around a synchronous key-value store holding one JSON
//! document per namespaced key. The contract mirrors browser localStorage:
//! `get` returns the raw document if the key is present, `set` overwrites it
//! whole, `remove` deletes it. There is no transactionality and no schema
//! versioning; concurrent writers race on last-write-wins.
//!
//! A key that is absent means "use the seed default". A key that is present
//! but structurally corrupt surfaces as [`StorageError::Corrupt`] from the
//! typed readers - the caller's screen fails, nothing else does.

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur when accessing the record store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing data directory could not be created.
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading a key failed for a reason other than absence.
    #[error("failed to read key {key}: {source}")]
    Read {
        /// The namespaced key.
        key: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing or removing a key failed.
    #[error("failed to write key {key}: {source}")]
    Write {
        /// The namespaced key.
        key: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A stored document does not deserialize into the expected shape.
    #[error("corrupt document under key {key}: {source}")]
    Corrupt {
        /// The namespaced key.
        key: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Synchronous key-value store holding raw JSON documents.
///
/// Implementations take `&self` for all operations; interior mutability is an
/// implementation concern (the file store writes straight to disk, the memory
/// store holds a mutex).
pub trait RecordStore: Send + Sync {
    /// Fetch the raw document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the read fails for a reason other
    /// than the key being absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the document stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed helpers over any [`RecordStore`].
pub trait RecordStoreExt: RecordStore {
    /// Fetch and deserialize the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if the document is present but does
    /// not deserialize into `T`, or a read error from the underlying store.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: key.to_owned(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns a serialization or write error from the underlying store.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Corrupt {
            key: key.to_owned(),
            source,
        })?;
        self.set(key, &raw)
    }
}

impl<S: RecordStore + ?Sized> RecordStoreExt for S {}

/// Namespaced storage keys for every persisted document.
///
/// One key per domain collection plus the cart, session and settings
/// singletons. The `lipoimports_` prefix scopes the documents within a shared
/// data directory.
pub mod keys {
    /// Product collection.
    pub const PRODUCTS: &str = "lipoimports_products";
    /// Category collection.
    pub const CATEGORIES: &str = "lipoimports_categories";
    /// Subcategory collection.
    pub const SUBCATEGORIES: &str = "lipoimports_subcategories";
    /// Video testimonial collection.
    pub const VIDEOS: &str = "lipoimports_videos";
    /// Order collection.
    pub const ORDERS: &str = "lipoimports_orders";
    /// Payment method collection.
    pub const PAYMENTS: &str = "lipoimports_payments";
    /// Shipping integration collection.
    pub const SHIPPING: &str = "lipoimports_shipping";
    /// Banner collection.
    pub const BANNERS: &str = "lipoimports_banners";
    /// Coupon collection.
    pub const COUPONS: &str = "lipoimports_coupons";
    /// Cart line items.
    pub const CART: &str = "lipoimports_cart";
    /// Currently applied coupon (`null` when none).
    pub const APPLIED_COUPON: &str = "lipoimports_applied_coupon";
    /// Logged-in user record.
    pub const USER: &str = "lipoimports_user";
    /// Site settings singleton.
    pub const SETTINGS: &str = "lipoimports_settings";

    /// Every key the store may write, in a stable order. Used by reset-style
    /// maintenance operations.
    pub const ALL: &[&str] = &[
        PRODUCTS,
        CATEGORIES,
        SUBCATEGORIES,
        VIDEOS,
        ORDERS,
        PAYMENTS,
        SHIPPING,
        BANNERS,
        COUPONS,
        CART,
        APPLIED_COUPON,
        USER,
        SETTINGS,
    ];
}
