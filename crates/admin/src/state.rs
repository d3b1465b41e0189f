//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::db::{AdminDirectory, AdminRepository, Catalog, CatalogRepository};
use crate::middleware::SessionCookies;

/// Application state shared across all handlers.
///
/// Immutable after construction; cloning is an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    admins: Arc<dyn AdminDirectory>,
    catalog: Arc<dyn Catalog>,
    session_cookies: SessionCookies,
}

impl AppState {
    /// Build state backed by `PostgreSQL`.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        Self::with_stores(
            config,
            Arc::new(AdminRepository::new(pool.clone())),
            Arc::new(CatalogRepository::new(pool)),
        )
    }

    /// Build state over arbitrary stores (the test suites pass a `MemoryStore`).
    #[must_use]
    pub fn with_stores(
        config: AdminConfig,
        admins: Arc<dyn AdminDirectory>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let session_cookies = SessionCookies::new(config.secure_cookies());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                admins,
                catalog,
                session_cookies,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn admins(&self) -> &dyn AdminDirectory {
        self.inner.admins.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn Catalog {
        self.inner.catalog.as_ref()
    }

    #[must_use]
    pub fn session_cookies(&self) -> SessionCookies {
        self.inner.session_cookies
    }
}
