//! Admin authentication error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during admin authentication operations.
///
/// `Display` strings are what clients see, so none of them carry detail about
/// which half of a credential pair was wrong or why a lookup failed.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Email or password was empty.
    #[error("Email and password are required")]
    MissingCredentials,

    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No valid session.
    #[error("Unauthorized")]
    Unauthorized,

    /// The admin store could not answer in time.
    #[error("Service temporarily unavailable")]
    Unavailable,

    /// The password hasher failed (provisioning only).
    #[error("failed to hash password")]
    PasswordHash,
}

impl AdminAuthError {
    /// HTTP status for this error on the JSON API.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Admin auth failure");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
