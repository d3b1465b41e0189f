//! Domain models for admin.
//!
//! - [`admin`] - Admin account as stored by the persistence layer
//! - [`session`] - The authenticated identity handed to handlers
//! - [`content`] - Travel content listed in the back office

pub mod admin;
pub mod content;
pub mod session;

pub use admin::Admin;
pub use content::{
    Category, CatalogSummary, Destination, GalleryImage, Inquiry, TourPackage,
};
pub use session::CurrentAdmin;
