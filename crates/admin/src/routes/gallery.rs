//! Gallery image listing.

use std::collections::HashMap;

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use wanderlust_core::DestinationId;

use super::{AdminView, render, short_date};
use crate::{
    error::AppError, filters, middleware::LayoutAdmin, models::GalleryImage, state::AppState,
};

#[derive(Debug, Clone)]
pub struct GalleryImageView {
    pub title: String,
    pub image_url: String,
    pub destination: String,
    pub created: String,
}

impl GalleryImageView {
    fn new(image: &GalleryImage, destinations: &HashMap<DestinationId, String>) -> Self {
        let destination = image
            .destination_id
            .and_then(|id| destinations.get(&id).cloned())
            .unwrap_or_else(|| "-".to_string());

        Self {
            title: image.title.clone(),
            image_url: image.image_url.clone(),
            destination,
            created: short_date(&image.created_at),
        }
    }
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub admin_user: AdminView,
    pub current_path: String,
    pub images: Vec<GalleryImageView>,
}

/// Gallery page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    LayoutAdmin(admin): LayoutAdmin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let (images, destinations) = tokio::try_join!(
        state.catalog().list_gallery_images(),
        state.catalog().list_destinations()
    )?;

    let names: HashMap<DestinationId, String> =
        destinations.into_iter().map(|d| (d.id, d.name)).collect();

    Ok(render(&GalleryTemplate {
        admin_user: AdminView::from(&admin),
        current_path: "/admin/gallery".to_string(),
        images: images
            .iter()
            .map(|image| GalleryImageView::new(image, &names))
            .collect(),
    }))
}
