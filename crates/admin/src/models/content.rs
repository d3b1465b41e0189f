//! Travel content domain types.
//!
//! These are read-only views of what the persistence layer holds. The admin
//! server lists them; creating and editing them happens elsewhere.

use chrono::{DateTime, Utc};
use serde::Serialize;

use wanderlust_core::{
    CategoryId, DestinationId, Email, GalleryImageId, InquiryId, InquiryStatus, PackageId,
    PackageStatus, Price,
};

/// A package category (e.g. "Honeymoon", "Diving").
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// A destination that packages and gallery images point at.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A sellable tour package.
///
/// `destination_name` and `category_name` are denormalized by the listing
/// query so pages don't need a second lookup.
#[derive(Debug, Clone, Serialize)]
pub struct TourPackage {
    pub id: PackageId,
    pub title: String,
    pub slug: String,
    pub destination_id: DestinationId,
    pub destination_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub price: Price,
    pub duration_days: i32,
    pub status: PackageStatus,
    pub created_at: DateTime<Utc>,
}

/// An image in the public gallery.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub title: String,
    pub image_url: String,
    pub destination_id: Option<DestinationId>,
    pub created_at: DateTime<Utc>,
}

/// A message sent through the public contact form.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
    pub package_id: Option<PackageId>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub packages: i64,
    pub destinations: i64,
    pub categories: i64,
    pub gallery_images: i64,
    pub unread_inquiries: i64,
}
