//! Destination listing.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use super::{AdminView, render, short_date};
use crate::{
    error::AppError, filters, middleware::LayoutAdmin, models::Destination, state::AppState,
};

#[derive(Debug, Clone)]
pub struct DestinationView {
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created: String,
}

impl From<&Destination> for DestinationView {
    fn from(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            country: destination.country.clone(),
            description: destination.description.clone().unwrap_or_default(),
            image_url: destination.image_url.clone(),
            created: short_date(&destination.created_at),
        }
    }
}

#[derive(Template)]
#[template(path = "destinations.html")]
pub struct DestinationsTemplate {
    pub admin_user: AdminView,
    pub current_path: String,
    pub destinations: Vec<DestinationView>,
}

/// Destinations page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    LayoutAdmin(admin): LayoutAdmin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let destinations = state.catalog().list_destinations().await?;

    Ok(render(&DestinationsTemplate {
        admin_user: AdminView::from(&admin),
        current_path: "/admin/destinations".to_string(),
        destinations: destinations.iter().map(DestinationView::from).collect(),
    }))
}
