//! JSON API for the back office, mounted at `/api/admin`.
//!
//! The edge and layout gates never run here. Every handler except login and
//! logout takes [`crate::middleware::RequireAdmin`], which resolves the
//! session itself.

pub mod auth;
pub mod content;
pub mod me;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the API router (paths relative to `/api/admin`).
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(me::router())
        .merge(content::router())
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("no such endpoint".to_string())
}
