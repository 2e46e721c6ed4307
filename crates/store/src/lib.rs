//! LipoImports Store - Local-first data layer.
//!
//! This crate is the state layer behind the LipoImports storefront and admin
//! back office. Every collection (products, categories, orders, coupons,
//! banners, ...) lives in a synchronous key-value record store as a JSON
//! document, hydrated once at open time and written back whole on every
//! mutation. There is no backend: payment and shipping integration records
//! hold credentials for a future API that is not wired up yet.
//!
//! # Components
//!
//! - [`storage`] - The persistent record store (JSON files on disk, or memory)
//! - [`collection`] - Generic read-modify-write collection over one store key
//! - [`store`] - The [`Store`] facade: one typed collection per entity
//! - [`cart`] - Line items plus at-most-one applied coupon, with derived totals
//! - [`session`] - Simulated login against a static credential table
//! - [`settings`] - Site appearance singleton with shallow-merge hydration
//!
//! # Concurrency model
//!
//! Single-threaded and synchronous by design. Storage writes are
//! last-write-wins with no locking; two processes sharing a data directory
//! race exactly as two browser tabs sharing localStorage would.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod collection;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod session;
pub mod settings;
pub mod storage;
pub mod store;

pub use cart::{Cart, CartItem};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use session::{AuthError, AuthService};
pub use settings::{SiteSettings, SiteSettingsPatch, SiteSettingsService};
pub use storage::{FileStore, MemoryStore, RecordStore, RecordStoreExt, StorageError};
pub use store::Store;
