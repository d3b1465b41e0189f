//! Travel content repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use wanderlust_core::{
    CategoryId, CurrencyCode, DestinationId, Email, GalleryImageId, InquiryId, InquiryStatus,
    PackageId, PackageStatus, Price,
};

use super::{Catalog, RepositoryError};
use crate::models::{
    CatalogSummary, Category, Destination, GalleryImage, Inquiry, TourPackage,
};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: Uuid,
    name: String,
    country: String,
    description: Option<String>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Self {
            id: DestinationId::new(row.id),
            name: row.name,
            country: row.country,
            description: row.description,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: Uuid,
    title: String,
    slug: String,
    destination_id: Uuid,
    destination_name: String,
    category_id: Uuid,
    category_name: String,
    price: Decimal,
    currency: String,
    duration_days: i32,
    status: PackageStatus,
    created_at: DateTime<Utc>,
}

impl TryFrom<PackageRow> for TourPackage {
    type Error = RepositoryError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        let currency_code = row
            .currency
            .parse::<CurrencyCode>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: PackageId::new(row.id),
            title: row.title,
            slug: row.slug,
            destination_id: DestinationId::new(row.destination_id),
            destination_name: row.destination_name,
            category_id: CategoryId::new(row.category_id),
            category_name: row.category_name,
            price: Price::new(row.price, currency_code),
            duration_days: row.duration_days,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct GalleryImageRow {
    id: Uuid,
    title: String,
    image_url: String,
    destination_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<GalleryImageRow> for GalleryImage {
    fn from(row: GalleryImageRow) -> Self {
        Self {
            id: GalleryImageId::new(row.id),
            title: row.title,
            image_url: row.image_url,
            destination_id: row.destination_id.map(DestinationId::new),
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct InquiryRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    package_id: Option<Uuid>,
    status: InquiryStatus,
    created_at: DateTime<Utc>,
}

impl TryFrom<InquiryRow> for Inquiry {
    type Error = RepositoryError;

    fn try_from(row: InquiryRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid inquiry email: {e}"))
        })?;

        Ok(Self {
            id: InquiryId::new(row.id),
            name: row.name,
            email,
            phone: row.phone,
            message: row.message,
            package_id: row.package_id.map(PackageId::new),
            status: row.status,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    packages: i64,
    destinations: i64,
    categories: i64,
    gallery_images: i64,
    unread_inquiries: i64,
}

// =============================================================================
// Repository
// =============================================================================

/// `PostgreSQL`-backed [`Catalog`].
#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for CatalogRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM admin.category ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>, RepositoryError> {
        let rows = sqlx::query_as::<_, DestinationRow>(
            "SELECT id, name, country, description, image_url, created_at \
             FROM admin.destination ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_packages(&self) -> Result<Vec<TourPackage>, RepositoryError> {
        let rows = sqlx::query_as::<_, PackageRow>(
            r"
            SELECT p.id, p.title, p.slug,
                   p.destination_id, d.name AS destination_name,
                   p.category_id, c.name AS category_name,
                   p.price, p.currency, p.duration_days, p.status, p.created_at
            FROM admin.tour_package p
            JOIN admin.destination d ON d.id = p.destination_id
            JOIN admin.category c ON c.id = p.category_id
            ORDER BY p.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>, RepositoryError> {
        let rows = sqlx::query_as::<_, GalleryImageRow>(
            "SELECT id, title, image_url, destination_id, created_at \
             FROM admin.gallery_image ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let rows = sqlx::query_as::<_, InquiryRow>(
            "SELECT id, name, email, phone, message, package_id, status, created_at \
             FROM admin.inquiry ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn summary(&self) -> Result<CatalogSummary, RepositoryError> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r"
            SELECT
                (SELECT COUNT(*) FROM admin.tour_package) AS packages,
                (SELECT COUNT(*) FROM admin.destination) AS destinations,
                (SELECT COUNT(*) FROM admin.category) AS categories,
                (SELECT COUNT(*) FROM admin.gallery_image) AS gallery_images,
                (SELECT COUNT(*) FROM admin.inquiry WHERE status = 'new') AS unread_inquiries
            ",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(CatalogSummary {
            packages: row.packages,
            destinations: row.destinations,
            categories: row.categories,
            gallery_images: row.gallery_images,
            unread_inquiries: row.unread_inquiries,
        })
    }
}
