//! Store configuration, sourced from the environment.

use std::env;
use std::path::PathBuf;

/// Where the file-backed record store keeps its documents.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per storage key.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Build the configuration from the environment, loading a `.env` file
    /// first if one is present.
    ///
    /// `LIPOIMPORTS_DATA_DIR` overrides the data directory; it defaults to
    /// `data` relative to the working directory.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("LIPOIMPORTS_DATA_DIR")
            .map_or_else(|_| PathBuf::from("data"), PathBuf::from);
        Self { data_dir }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}
