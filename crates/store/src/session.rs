//! Session and identity.
//!
//! Login is simulated: credentials are checked against a static two-entry
//! table (one admin, one customer) and the matched user record - never the
//! password - is persisted to the record store as the session. There is no
//! token and no expiry; "authenticated" means "a user document is present".
//!
//! State machine: Anonymous → (successful login) → Authenticated{role} →
//! (logout, or store cleared externally) → Anonymous.

use std::sync::{Arc, LazyLock};

use lipoimports_core::{Email, UserId, UserRole};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::models::User;
use crate::storage::{RecordStore, RecordStoreExt, StorageError, keys};

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential table entry matched.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Reading or writing the session record failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// One entry of the static credential table.
struct MockCredential {
    email: Email,
    password: SecretString,
    user_id: &'static str,
    name: &'static str,
    role: UserRole,
}

fn credential_email(s: &str) -> Email {
    // Table emails are static and well-formed.
    Email::parse(s).unwrap_or_else(|_| unreachable!("invalid credential email: {s}"))
}

/// The demonstration credential table: one admin, one customer.
static CREDENTIALS: LazyLock<Vec<MockCredential>> = LazyLock::new(|| {
    vec![
        MockCredential {
            email: credential_email("admin@lipoimports.com"),
            password: SecretString::from("admin123"),
            user_id: "admin-1",
            name: "Administrador",
            role: UserRole::Admin,
        },
        MockCredential {
            email: credential_email("cliente@email.com"),
            password: SecretString::from("cliente123"),
            user_id: "customer-1",
            name: "Cliente Teste",
            role: UserRole::Customer,
        },
    ]
});

/// Authentication state over the record store.
pub struct AuthService {
    store: Arc<dyn RecordStore>,
    current: Option<User>,
}

impl AuthService {
    /// Load the session, restoring a previously stored user if present.
    ///
    /// # Errors
    ///
    /// Returns a read error, or a corrupt-document error if the stored user
    /// record does not deserialize.
    pub fn load(store: Arc<dyn RecordStore>) -> Result<Self, StorageError> {
        let current = store.get_json::<User>(keys::USER)?;
        Ok(Self { store, current })
    }

    /// Attempt a login.
    ///
    /// The email match is case-insensitive, the password match exact. On
    /// success the user record (without the password) is persisted and
    /// becomes the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no table entry matches;
    /// the session is left absent. Storage failures propagate.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let Some(credential) = CREDENTIALS
            .iter()
            .find(|c| c.email.matches(email) && c.password.expose_secret() == password)
        else {
            tracing::debug!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let user = User {
            id: UserId::new(credential.user_id),
            email: credential.email.clone(),
            name: credential.name.to_owned(),
            role: credential.role,
        };
        self.store.set_json(keys::USER, &user)?;
        tracing::info!(user = %user.email, role = %user.role, "login succeeded");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the session, both in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.store.remove(keys::USER)?;
        self.current = None;
        Ok(())
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the session belongs to an admin. Admin-only screens redirect
    /// to login when this is false.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.role.is_admin())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn service() -> AuthService {
        AuthService::load(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_admin_login_succeeds() {
        let mut auth = service();
        let user = auth.login("admin@lipoimports.com", "admin123").unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert!(auth.is_authenticated());
        assert!(auth.is_admin());
    }

    #[test]
    fn test_email_match_is_case_insensitive() {
        let mut auth = service();
        assert!(auth.login("Admin@LipoImports.com", "admin123").is_ok());
    }

    #[test]
    fn test_wrong_password_leaves_session_absent() {
        let store = Arc::new(MemoryStore::new());
        let mut auth = AuthService::load(store.clone()).unwrap();
        let err = auth.login("admin@lipoimports.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated());
        assert!(store.get(keys::USER).unwrap().is_none());
    }

    #[test]
    fn test_customer_is_not_admin() {
        let mut auth = service();
        auth.login("cliente@email.com", "cliente123").unwrap();
        assert!(auth.is_authenticated());
        assert!(!auth.is_admin());
    }

    #[test]
    fn test_session_survives_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut auth = AuthService::load(store.clone()).unwrap();
            auth.login("admin@lipoimports.com", "admin123").unwrap();
        }
        let auth = AuthService::load(store).unwrap();
        assert!(auth.is_admin());
    }

    #[test]
    fn test_logout_clears_store_and_state() {
        let store = Arc::new(MemoryStore::new());
        let mut auth = AuthService::load(store.clone()).unwrap();
        auth.login("admin@lipoimports.com", "admin123").unwrap();
        auth.logout().unwrap();
        assert!(!auth.is_authenticated());
        assert!(store.get(keys::USER).unwrap().is_none());
    }
}
