//! Admin account provisioning.
//!
//! Admins are never created over HTTP. These commands are the only way in.
//!
//! # Usage
//!
//! ```bash
//! WL_ADMIN_PASSWORD='…' wl-cli admin create -e ops@wanderlust.travel -n "Ops"
//! wl-cli admin list
//! wl-cli admin remove -e ops@wanderlust.travel
//! WL_ADMIN_PASSWORD='…' wl-cli admin hash-password
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `WL_ADMIN_PASSWORD` - Password for `create` and `hash-password`

use thiserror::Error;

use wanderlust_admin::db::{self, AdminRepository, NewAdmin, RepositoryError};
use wanderlust_admin::services::{AdminAuthError, hash_password};
use wanderlust_core::{Email, EmailError};

/// Shortest password `create` accepts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error.
    #[error("{0}")]
    Repository(RepositoryError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Display name is blank.
    #[error("Name must not be empty")]
    EmptyName,

    /// Password too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,

    /// Hashing failed.
    #[error("Password hashing failed: {0}")]
    Hash(#[from] AdminAuthError),

    /// Admin already exists.
    #[error("Admin already exists with email: {0}")]
    AdminExists(String),

    /// No admin with that email.
    #[error("No admin with email: {0}")]
    NotFound(String),
}

async fn repository() -> Result<AdminRepository, AdminError> {
    let database_url =
        super::database_url().ok_or(AdminError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to admin database...");
    let pool = db::create_pool(&database_url).await?;
    Ok(AdminRepository::new(pool))
}

/// Check a password against the provisioning policy.
fn check_password(password: &str) -> Result<(), AdminError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AdminError::WeakPassword);
    }
    Ok(())
}

/// Create a new admin.
///
/// # Errors
///
/// Returns `AdminError::AdminExists` if the email is taken, or a validation
/// error for a bad email, blank name or short password.
pub async fn create(email: &str, name: &str, password: &str) -> Result<(), AdminError> {
    let email = Email::parse(email)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AdminError::EmptyName);
    }
    check_password(password)?;

    let password_hash = hash_password(password)?;
    let repo = repository().await?;

    let admin = repo
        .create(&NewAdmin {
            email: &email,
            name,
            password_hash: &password_hash,
        })
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::AdminExists(email.to_string()),
            other => AdminError::Repository(other),
        })?;

    tracing::info!(
        "Admin created successfully! ID: {}, Email: {}, Name: {}",
        admin.id,
        admin.email,
        admin.name
    );
    Ok(())
}

/// Remove an admin. Their sessions stop working immediately.
///
/// # Errors
///
/// Returns `AdminError::NotFound` if no admin has this email.
pub async fn remove(email: &str) -> Result<(), AdminError> {
    let email = Email::parse(email)?;
    let repo = repository().await?;

    repo.delete_by_email(&email).await.map_err(|e| match e {
        RepositoryError::NotFound => AdminError::NotFound(email.to_string()),
        other => AdminError::Repository(other),
    })?;

    tracing::info!("Admin removed: {}", email);
    Ok(())
}

/// List all admins.
///
/// # Errors
///
/// Returns `AdminError` if the query fails.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), AdminError> {
    let repo = repository().await?;
    let admins = repo.list_all().await.map_err(AdminError::Repository)?;

    if admins.is_empty() {
        tracing::info!("No admins provisioned");
        return Ok(());
    }

    for admin in admins {
        println!(
            "{}\t{}\t{}\t{}",
            admin.id,
            admin.email,
            admin.name,
            admin.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

/// Print an Argon2id hash for `password`.
///
/// # Errors
///
/// Returns `AdminError::Hash` if hashing fails.
#[allow(clippy::print_stdout)]
pub fn print_hash(password: &str) -> Result<(), AdminError> {
    let hash = hash_password(password)?;
    println!("{hash}");
    Ok(())
}
