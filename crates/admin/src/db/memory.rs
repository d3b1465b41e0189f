//! In-memory store used by the test suites and local demos.
//!
//! Implements both [`AdminDirectory`] and [`Catalog`]. Failure injection
//! (`set_unavailable`, `set_latency`) lets tests drive the fail-closed paths
//! without a database, and `lookups()` counts every admin lookup so tests can
//! assert when the store was not consulted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use tokio::sync::RwLock;

use wanderlust_core::{AdminId, Email};

use super::{AdminDirectory, Catalog, RepositoryError};
use crate::models::{
    Admin, CatalogSummary, Category, Destination, GalleryImage, Inquiry, TourPackage,
};

#[derive(Default)]
struct Content {
    categories: Vec<Category>,
    destinations: Vec<Destination>,
    packages: Vec<TourPackage>,
    gallery_images: Vec<GalleryImage>,
    inquiries: Vec<Inquiry>,
}

#[derive(Default)]
struct Inner {
    admins: RwLock<Vec<Admin>>,
    content: RwLock<Content>,
    unavailable: AtomicBool,
    latency: RwLock<Option<Duration>>,
    lookups: AtomicUsize,
}

/// Shared in-memory store. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an admin with an already-hashed password. Returns the stored row.
    pub async fn insert_admin(&self, email: Email, name: &str, password_hash: &str) -> Admin {
        let admin = Admin {
            id: AdminId::generate(),
            email,
            name: name.to_owned(),
            password_hash: SecretString::from(password_hash.to_owned()),
            created_at: Utc::now(),
        };
        self.inner.admins.write().await.push(admin.clone());
        admin
    }

    /// Remove an admin. Returns whether a row was deleted.
    pub async fn remove_admin(&self, id: AdminId) -> bool {
        let mut admins = self.inner.admins.write().await;
        let before = admins.len();
        admins.retain(|a| a.id != id);
        admins.len() != before
    }

    pub async fn add_category(&self, category: Category) {
        self.inner.content.write().await.categories.push(category);
    }

    pub async fn add_destination(&self, destination: Destination) {
        self.inner.content.write().await.destinations.push(destination);
    }

    pub async fn add_package(&self, package: TourPackage) {
        self.inner.content.write().await.packages.push(package);
    }

    pub async fn add_gallery_image(&self, image: GalleryImage) {
        self.inner.content.write().await.gallery_images.push(image);
    }

    pub async fn add_inquiry(&self, inquiry: Inquiry) {
        self.inner.content.write().await.inquiries.push(inquiry);
    }

    /// Make every subsequent call fail with [`RepositoryError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delay every admin lookup by `latency`.
    pub async fn set_latency(&self, latency: Option<Duration>) {
        *self.inner.latency.write().await = latency;
    }

    /// Number of admin lookups served so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.inner.lookups.load(Ordering::SeqCst)
    }

    async fn before_lookup(&self) -> Result<(), RepositoryError> {
        self.inner.lookups.fetch_add(1, Ordering::SeqCst);

        let latency = *self.inner.latency.read().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.check_available()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("memory store offline".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminDirectory for MemoryStore {
    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        self.before_lookup().await?;
        let admins = self.inner.admins.read().await;
        Ok(admins.iter().find(|a| &a.email == email).cloned())
    }

    async fn find_admin_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        self.before_lookup().await?;
        let admins = self.inner.admins.read().await;
        Ok(admins.iter().find(|a| a.id == id).cloned())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }
}

#[async_trait]
impl Catalog for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.check_available()?;
        let mut categories = self.inner.content.read().await.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, RepositoryError> {
        self.check_available()?;
        let mut destinations = self.inner.content.read().await.destinations.clone();
        destinations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(destinations)
    }

    async fn list_packages(&self) -> Result<Vec<TourPackage>, RepositoryError> {
        self.check_available()?;
        let mut packages = self.inner.content.read().await.packages.clone();
        packages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(packages)
    }

    async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>, RepositoryError> {
        self.check_available()?;
        let mut images = self.inner.content.read().await.gallery_images.clone();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(images)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        self.check_available()?;
        let mut inquiries = self.inner.content.read().await.inquiries.clone();
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(inquiries)
    }

    async fn summary(&self) -> Result<CatalogSummary, RepositoryError> {
        self.check_available()?;
        let content = self.inner.content.read().await;
        let count = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);

        Ok(CatalogSummary {
            packages: count(content.packages.len()),
            destinations: count(content.destinations.len()),
            categories: count(content.categories.len()),
            gallery_images: count(content.gallery_images.len()),
            unread_inquiries: count(
                content
                    .inquiries
                    .iter()
                    .filter(|i| i.status.is_unread())
                    .count(),
            ),
        })
    }
}
