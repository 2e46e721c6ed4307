//! Check a credential pair against the login table.

use tracing::info;

use lipoimports_store::storage::FileStore;
use lipoimports_store::{AuthService, StoreConfig};

/// Attempt a login and persist the session on success, exactly as the site
/// would.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the credentials do not
/// match.
pub fn run(
    config: &StoreConfig,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(config.data_dir.clone())?;
    let mut auth = AuthService::load(std::sync::Arc::new(store))?;

    let user = auth.login(email, password)?;
    info!(user = %user.email, role = %user.role, "Login succeeded, session persisted");
    Ok(())
}
