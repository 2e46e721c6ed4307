//! Integration tests for the LipoImports store.
//!
//! Every test runs against its own temporary data directory (or an in-memory
//! record store), so the suite needs no setup and can run fully in parallel.
//!
//! # Test Categories
//!
//! - `store_collections` - Collection CRUD, seeding and persistence
//! - `cart_pricing` - Cart totals and coupon eligibility
//! - `session_auth` - Login, logout and session persistence
//! - `banner_reorder` - Banner ordering semantics

use std::sync::Arc;

use lipoimports_store::storage::FileStore;
use lipoimports_store::{Store, StoreConfig};
use tempfile::TempDir;

/// A store over a temporary data directory, removed on drop.
pub struct TestContext {
    // Held for its Drop; the directory outlives every store handle.
    _dir: TempDir,
    data_dir: std::path::PathBuf,
    pub store: Store,
}

impl TestContext {
    /// Open a fresh store in a new temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory or store cannot be created; tests have no
    /// recovery path.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let data_dir = dir.path().to_path_buf();
        let config = StoreConfig {
            data_dir: data_dir.clone(),
        };
        let store = Store::open(&config).expect("failed to open store");
        Self {
            _dir: dir,
            data_dir,
            store,
        }
    }

    /// Re-open a second store handle over the same data directory, simulating
    /// a fresh process start.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be opened.
    #[must_use]
    pub fn reopen(&self) -> Store {
        let config = StoreConfig {
            data_dir: self.data_dir.clone(),
        };
        Store::open(&config).expect("failed to reopen store")
    }

    /// A config pointing at this context's data directory, for code paths
    /// that open the store themselves (e.g. CLI commands).
    #[must_use]
    pub fn config(&self) -> StoreConfig {
        StoreConfig {
            data_dir: self.data_dir.clone(),
        }
    }

    /// The raw record store over the same data directory, for services that
    /// share it with the [`Store`].
    ///
    /// # Panics
    ///
    /// Panics if the file store cannot be opened.
    #[must_use]
    pub fn record_store(&self) -> Arc<FileStore> {
        Arc::new(FileStore::open(self.data_dir.clone()).expect("failed to open file store"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
