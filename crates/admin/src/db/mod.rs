//! Database operations for the admin `PostgreSQL` schema.
//!
//! ## Tables (schema `admin`)
//!
//! - `admin` - Admin accounts (email, display name, Argon2id hash)
//! - `category`, `destination`, `tour_package`, `gallery_image`, `inquiry` - Travel content
//!
//! The request path only depends on the two contracts defined here,
//! [`AdminDirectory`] and [`Catalog`]. `PostgreSQL` implementations live in
//! [`admins`] and [`catalog`]; [`memory`] backs the test suites.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p wanderlust-cli -- migrate
//! ```

pub mod admins;
pub mod catalog;
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use wanderlust_core::{AdminId, Email};

use crate::models::{
    Admin, CatalogSummary, Category, Destination, GalleryImage, Inquiry, TourPackage,
};

pub use admins::{AdminRepository, NewAdmin};
pub use catalog::CatalogRepository;
pub use memory::MemoryStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Admin lookups consumed by the session core.
///
/// Both lookups return `Ok(None)` for "no such admin". An `Err` means the
/// store could not answer, which callers must never read as "authenticated".
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    /// Find an admin by (normalized) email.
    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError>;

    /// Find an admin by ID.
    async fn find_admin_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError>;

    /// Cheap connectivity probe used by the readiness endpoint.
    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Read access to travel content for the back-office listings.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError>;

    async fn list_destinations(&self) -> Result<Vec<Destination>, RepositoryError>;

    /// Packages, newest first, with destination and category names filled in.
    async fn list_packages(&self) -> Result<Vec<TourPackage>, RepositoryError>;

    async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>, RepositoryError>;

    /// Inquiries, newest first.
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, RepositoryError>;

    /// Row counts for the dashboard.
    async fn summary(&self) -> Result<CatalogSummary, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
