//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use super::{AdminView, render};
use crate::{filters, middleware::LayoutAdmin, models::CatalogSummary, state::AppState};

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_user: AdminView,
    pub current_path: String,
    pub summary: CatalogSummary,
    pub summary_error: bool,
}

/// Dashboard page handler.
///
/// A failed count query still renders the page, with a notice in place of the numbers.
#[instrument(skip(admin, state))]
pub async fn dashboard(LayoutAdmin(admin): LayoutAdmin, State(state): State<AppState>) -> Html<String> {
    let (summary, summary_error) = match state.catalog().summary().await {
        Ok(summary) => (summary, false),
        Err(e) => {
            tracing::error!("Failed to load dashboard counts: {e}");
            (CatalogSummary::default(), true)
        }
    };

    render(&DashboardTemplate {
        admin_user: AdminView::from(&admin),
        current_path: "/admin".to_string(),
        summary,
        summary_error,
    })
}
