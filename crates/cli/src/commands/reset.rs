//! Wipe every store document.

use tracing::info;

use lipoimports_store::StoreConfig;
use lipoimports_store::storage::{FileStore, RecordStore, keys};

/// Remove every known store document from the data directory. Removal is
/// idempotent; absent documents are skipped silently.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a document
/// cannot be removed.
pub fn run(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(config.data_dir.clone())?;

    for key in keys::ALL {
        store.remove(key)?;
    }

    info!(data_dir = %store.root().display(), "Store documents removed");
    Ok(())
}
