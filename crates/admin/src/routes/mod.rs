//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to /admin
//! GET  /health                  - Liveness
//! GET  /health/ready            - Readiness (admin store reachable)
//!
//! # Pages (edge gate + layout gate)
//! GET  /admin                   - Dashboard
//! GET  /admin/login             - Login page (exempt from both gates)
//! POST /admin/login             - Form login
//! POST /admin/logout            - Form logout
//! GET  /admin/packages          - Tour packages
//! GET  /admin/destinations      - Destinations
//! GET  /admin/categories        - Categories
//! GET  /admin/gallery           - Gallery images
//! GET  /admin/inquiries         - Contact inquiries
//!
//! # JSON API (RequireAdmin on every route except login/logout)
//! POST /api/admin/auth/login
//! POST /api/admin/auth/logout
//! GET  /api/admin/me
//! GET  /api/admin/{packages,destinations,categories,gallery,inquiries}
//! ```

pub mod api;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod destinations;
pub mod gallery;
pub mod inquiries;
pub mod packages;

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    response::{Html, Redirect},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::middleware::{ADMIN_ROOT, LOGIN_PATH, edge_gate, layout_gate, security_headers_middleware};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Build the complete admin router.
///
/// Tracing, request IDs and Sentry are added by the binary on top of this.
pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route(ADMIN_ROOT, get(dashboard::dashboard))
        .route(LOGIN_PATH, get(auth::login_page).post(auth::login_form))
        .route("/admin/packages", get(packages::index))
        .route("/admin/destinations", get(destinations::index))
        .route("/admin/categories", get(categories::index))
        .route("/admin/gallery", get(gallery::index))
        .route("/admin/inquiries", get(inquiries::index))
        .route_layer(from_fn_with_state(state.clone(), layout_gate));

    Router::new()
        .route("/", get(|| async { Redirect::to(ADMIN_ROOT) }))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/admin/logout", post(auth::logout_form))
        .merge(pages)
        .nest("/api/admin", api::router())
        .nest_service("/static", ServeDir::new("crates/admin/static"))
        .layer(from_fn_with_state(state.clone(), edge_gate))
        .layer(from_fn(security_headers_middleware))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the admin store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.admins().health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Render a page template, falling back to a plain error string.
pub(crate) fn render(template: &impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// The signed-in admin as shown in the page chrome.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub name: String,
    pub email: String,
}

impl From<&CurrentAdmin> for AdminView {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            name: admin.name.clone(),
            email: admin.email.to_string(),
        }
    }
}

/// Format a timestamp for listing tables.
pub(crate) fn short_date(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}
