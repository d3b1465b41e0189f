//! Login and logout API handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    models::CurrentAdmin,
    services::auth::{AdminAuthError, AdminAuthService},
    state::AppState,
};

/// Build the auth API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Request body for login.
///
/// Both fields are optional so a missing field reports as missing
/// credentials rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub admin: CurrentAdmin,
}

/// Response for logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Log in with email and password.
///
/// POST /api/admin/auth/login
///
/// # Errors
///
/// - 400 if either field is missing or empty, or the body isn't JSON
/// - 401 for an unknown email or a wrong password (same body for both)
/// - 503 if the admin store is unavailable
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdminAuthError> {
    let Ok(Json(body)) = body else {
        return Err(AdminAuthError::MissingCredentials);
    };

    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let admin = AdminAuthService::new(state.admins())
        .login(&email, &password)
        .await?;

    let jar = state.session_cookies().issue(jar, admin.id);
    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            admin,
        }),
    ))
}

/// Clear the session cookie.
///
/// POST /api/admin/auth/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = state.session_cookies().revoke(jar);
    (jar, Json(LogoutResponse { success: true }))
}
