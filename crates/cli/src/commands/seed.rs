//! Force-write every seed collection.
//!
//! The store itself only materializes seeds lazily, on the first mutation of
//! each collection. This command writes them all out immediately, which is
//! handy for producing a complete data directory to inspect or ship.

use tracing::info;

use lipoimports_store::storage::{FileStore, RecordStoreExt, keys};
use lipoimports_store::{StoreConfig, seed};

/// Write every seed collection, overwriting whatever is stored.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a document
/// cannot be written.
pub fn run(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(config.data_dir.clone())?;

    store.set_json(keys::PRODUCTS, &seed::products())?;
    store.set_json(keys::CATEGORIES, &seed::categories())?;
    store.set_json(keys::SUBCATEGORIES, &seed::subcategories())?;
    store.set_json(keys::VIDEOS, &seed::videos())?;
    store.set_json(keys::ORDERS, &seed::orders())?;
    store.set_json(keys::COUPONS, &seed::coupons())?;
    store.set_json(keys::PAYMENTS, &seed::payment_methods())?;
    store.set_json(keys::SHIPPING, &seed::shipping_integrations())?;
    store.set_json(keys::BANNERS, &seed::banners())?;

    info!(data_dir = %store.root().display(), "Seed collections written");
    Ok(())
}
