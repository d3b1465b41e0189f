//! Admin authentication service.
//!
//! Password login for the single-admin back office. Hashes are Argon2id with
//! the crate defaults (19 MiB, 2 iterations, 1 lane).

mod error;

pub use error::AdminAuthError;

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;
use tracing::instrument;

use wanderlust_core::Email;

use crate::db::AdminDirectory;
use crate::models::CurrentAdmin;

/// Hash verified against when the submitted email is unknown, so both
/// rejection paths spend the same time in Argon2.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("wanderlust-timing-equalizer").ok());

/// Hash a password for storage.
///
/// # Errors
///
/// Returns `AdminAuthError::PasswordHash` if the hasher fails.
pub fn hash_password(password: &str) -> Result<String, AdminAuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AdminAuthError::PasswordHash)
}

/// Verify a password against a stored PHC hash.
///
/// An unparseable hash counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Burn one verification against the dummy hash.
fn equalize_timing(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

/// Admin authentication service.
///
/// Borrowed per request; holds no state of its own.
pub struct AdminAuthService<'a> {
    admins: &'a dyn AdminDirectory,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(admins: &'a dyn AdminDirectory) -> Self {
        Self { admins }
    }

    /// Check an email/password pair.
    ///
    /// Returns the public view of the admin on success. Issuing the session
    /// cookie is the caller's job.
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` if either field is empty (email after trimming)
    /// - `InvalidCredentials` for an unknown email, a malformed email or a wrong password
    /// - `Unavailable` if the admin store fails
    #[instrument(skip(self, email, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentAdmin, AdminAuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AdminAuthError::MissingCredentials);
        }

        // Something that can't be an address can't belong to an admin.
        let Ok(email) = Email::parse(email) else {
            equalize_timing(password);
            return Err(AdminAuthError::InvalidCredentials);
        };

        let admin = self.admins.find_admin_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Admin lookup failed during login");
            AdminAuthError::Unavailable
        })?;

        let Some(admin) = admin else {
            equalize_timing(password);
            tracing::info!("Admin login rejected");
            return Err(AdminAuthError::InvalidCredentials);
        };

        if !verify_password(password, admin.password_hash.expose_secret()) {
            tracing::info!(admin_id = %admin.id, "Admin login rejected");
            return Err(AdminAuthError::InvalidCredentials);
        }

        tracing::info!(admin_id = %admin.id, "Admin logged in");
        Ok(CurrentAdmin::from(admin))
    }
}
