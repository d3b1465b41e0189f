//! Current admin API handler.

use axum::{Json, Router, routing::get};

use crate::{middleware::RequireAdmin, models::CurrentAdmin, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// GET /api/admin/me
pub async fn me(RequireAdmin(admin): RequireAdmin) -> Json<CurrentAdmin> {
    Json(admin)
}
