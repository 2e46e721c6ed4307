//! Logged-in user record.

use lipoimports_core::{Email, UserId, UserRole};
use serde::{Deserialize, Serialize};

/// The identity persisted for a logged-in session.
///
/// No credential material is ever stored here; the password check happens
/// against the static credential table in [`crate::session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub role: UserRole,
}
