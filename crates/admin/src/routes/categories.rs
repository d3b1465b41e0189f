//! Category listing.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use super::{AdminView, render, short_date};
use crate::{
    error::AppError, filters, middleware::LayoutAdmin, models::Category, state::AppState,
};

#[derive(Debug, Clone)]
pub struct CategoryView {
    pub name: String,
    pub slug: String,
    pub created: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            created: short_date(&category.created_at),
        }
    }
}

#[derive(Template)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub admin_user: AdminView,
    pub current_path: String,
    pub categories: Vec<CategoryView>,
}

/// Categories page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    LayoutAdmin(admin): LayoutAdmin,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let categories = state.catalog().list_categories().await?;

    Ok(render(&CategoriesTemplate {
        admin_user: AdminView::from(&admin),
        current_path: "/admin/categories".to_string(),
        categories: categories.iter().map(CategoryView::from).collect(),
    }))
}
