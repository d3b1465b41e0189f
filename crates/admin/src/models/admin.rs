//! Admin account domain type.

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use wanderlust_core::{AdminId, Email};

/// An admin account.
///
/// The password hash is held as a secret so it never shows up in `Debug`
/// output or logs. Only [`crate::services::auth`] ever exposes it, and only to
/// the password verifier.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique admin ID. Also the session cookie value.
    pub id: AdminId,
    /// Admin's email address (normalized).
    pub email: Email,
    /// Admin's display name.
    pub name: String,
    /// Argon2id PHC string.
    pub password_hash: SecretString,
    /// When the admin was provisioned.
    pub created_at: DateTime<Utc>,
}
