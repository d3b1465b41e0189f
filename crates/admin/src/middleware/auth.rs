//! Session resolution and authentication extractors for admin.
//!
//! Every guard in the crate funnels through [`authenticate`]:
//!
//! - the edge gate asks for [`Strictness::Presence`] (cookie parses, no lookup)
//! - the layout gate and [`RequireAdmin`] ask for [`Strictness::Verified`]
//!   (cookie parses *and* the admin row still exists)
//!
//! A failed or slow lookup is logged and treated as "no session".

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::instrument;

use wanderlust_core::AdminId;

use super::edge::LOGIN_PATH;
use super::session::SessionCookies;
use crate::models::CurrentAdmin;
use crate::services::auth::AdminAuthError;
use crate::state::AppState;

/// How much [`authenticate`] should check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// A well-formed session cookie is present.
    Presence,
    /// The cookie resolves to an existing admin.
    Verified,
}

/// Outcome of a successful [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authenticated {
    /// Cookie present but not checked against the store.
    Pending(AdminId),
    /// Cookie resolved to this admin.
    Verified(CurrentAdmin),
}

/// Resolve the request's session at the requested strictness.
///
/// Returns `None` whenever the caller must treat the request as
/// unauthenticated, including when the admin store is unavailable.
pub async fn authenticate(
    jar: &CookieJar,
    state: &AppState,
    strictness: Strictness,
) -> Option<Authenticated> {
    let admin_id = SessionCookies::read(jar)?;

    match strictness {
        Strictness::Presence => Some(Authenticated::Pending(admin_id)),
        Strictness::Verified => match resolve(state, admin_id).await {
            Ok(Some(admin)) => Some(Authenticated::Verified(admin)),
            Ok(None) => {
                tracing::info!(admin_id = %admin_id, "Session does not resolve to an admin");
                None
            }
            // Already logged by `resolve`.
            Err(_) => None,
        },
    }
}

/// Shorthand for `authenticate(.., Verified)` that hands back the admin.
pub async fn resolve_session(jar: &CookieJar, state: &AppState) -> Option<CurrentAdmin> {
    match authenticate(jar, state, Strictness::Verified).await {
        Some(Authenticated::Verified(admin)) => Some(admin),
        _ => None,
    }
}

/// Look an admin up by ID, bounded by the configured deadline.
///
/// # Errors
///
/// Returns `AdminAuthError::Unavailable` if the store errors or the deadline
/// passes.
#[instrument(skip(state))]
async fn resolve(
    state: &AppState,
    admin_id: AdminId,
) -> Result<Option<CurrentAdmin>, AdminAuthError> {
    let deadline = state.config().session_lookup_timeout;

    match tokio::time::timeout(deadline, state.admins().find_admin_by_id(admin_id)).await {
        Ok(Ok(admin)) => Ok(admin.map(CurrentAdmin::from)),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Admin lookup failed");
            Err(AdminAuthError::Unavailable)
        }
        Err(_) => {
            tracing::error!(timeout_ms = deadline.as_millis(), "Admin lookup timed out");
            Err(AdminAuthError::Unavailable)
        }
    }
}

// =============================================================================
// Extractors
// =============================================================================

/// Extractor for the JSON API: full session check, 401 on failure.
///
/// Does not rely on any middleware having run.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        resolve_session(&jar, state)
            .await
            .map(Self)
            .ok_or(AdminAuthError::Unauthorized)
    }
}

/// Extractor for pages: the admin the layout gate already resolved.
///
/// Redirects to the login page if the gate didn't run or found nobody.
pub struct LayoutAdmin(pub CurrentAdmin);

/// Rejection for [`LayoutAdmin`].
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

impl<S> FromRequestParts<S> for LayoutAdmin
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAdmin>()
            .cloned()
            .map(Self)
            .ok_or(RedirectToLogin)
    }
}
