//! Admin account repository.
//!
//! Implements [`AdminDirectory`] for the session core and adds the
//! provisioning operations used by `wl-cli` (create, remove, list). Nothing on
//! the HTTP request path writes to this table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use sqlx::PgPool;
use uuid::Uuid;

use wanderlust_core::{AdminId, Email};

use super::{AdminDirectory, RepositoryError};
use crate::models::Admin;

const ADMIN_COLUMNS: &str = "id, email, name, password_hash, created_at";

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` admin queries.
#[derive(sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminId::new(row.id),
            email,
            name: row.name,
            password_hash: SecretString::from(row.password_hash),
            created_at: row.created_at,
        })
    }
}

/// Fields needed to provision a new admin.
pub struct NewAdmin<'a> {
    pub email: &'a Email,
    pub name: &'a str,
    /// Already-hashed password (see [`crate::services::auth::hash_password`]).
    pub password_hash: &'a str,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin account database operations.
#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new admin with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_admin: &NewAdmin<'_>) -> Result<Admin, RepositoryError> {
        let query = format!(
            "INSERT INTO admin.admin (id, email, name, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ADMIN_COLUMNS}"
        );

        let row = sqlx::query_as::<_, AdminRow>(&query)
            .bind(AdminId::generate())
            .bind(new_admin.email.as_str())
            .bind(new_admin.name)
            .bind(new_admin.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("email already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?;

        row.try_into()
    }

    /// Delete an admin by email.
    ///
    /// Every session pointing at this admin stops resolving immediately.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no admin has this email.
    pub async fn delete_by_email(&self, email: &Email) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM admin.admin WHERE email = $1")
            .bind(email.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// List all admins, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn list_all(&self) -> Result<Vec<Admin>, RepositoryError> {
        let query = format!("SELECT {ADMIN_COLUMNS} FROM admin.admin ORDER BY created_at ASC");

        let rows = sqlx::query_as::<_, AdminRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[async_trait]
impl AdminDirectory for AdminRepository {
    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        let query = format!("SELECT {ADMIN_COLUMNS} FROM admin.admin WHERE email = $1");

        let row = sqlx::query_as::<_, AdminRow>(&query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_admin_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        let query = format!("SELECT {ADMIN_COLUMNS} FROM admin.admin WHERE id = $1");

        let row = sqlx::query_as::<_, AdminRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
