//! Read-only content API handlers.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppError,
    middleware::RequireAdmin,
    models::{Category, Destination, GalleryImage, Inquiry, TourPackage},
    state::AppState,
};

/// Build the content API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/destinations", get(list_destinations))
        .route("/categories", get(list_categories))
        .route("/gallery", get(list_gallery_images))
        .route("/inquiries", get(list_inquiries))
}

/// GET /api/admin/packages
pub async fn list_packages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<TourPackage>>, AppError> {
    Ok(Json(state.catalog().list_packages().await?))
}

/// GET /api/admin/destinations
pub async fn list_destinations(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Destination>>, AppError> {
    Ok(Json(state.catalog().list_destinations().await?))
}

/// GET /api/admin/categories
pub async fn list_categories(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(state.catalog().list_categories().await?))
}

/// GET /api/admin/gallery
pub async fn list_gallery_images(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryImage>>, AppError> {
    Ok(Json(state.catalog().list_gallery_images().await?))
}

/// GET /api/admin/inquiries
pub async fn list_inquiries(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Inquiry>>, AppError> {
    Ok(Json(state.catalog().list_inquiries().await?))
}
