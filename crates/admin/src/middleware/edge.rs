//! Edge gate for the `/admin` page tree.
//!
//! Runs ahead of routing. It only checks that a session cookie is *present*;
//! whether it still belongs to an admin is the layout gate's job (see
//! [`super::layout`]). Requests for the login page are tagged with
//! [`LoginPageMarker`] so the layout gate lets them through.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use super::auth::{Strictness, authenticate};
use crate::state::AppState;

/// Root of the protected page tree.
pub const ADMIN_ROOT: &str = "/admin";

/// Login page. Exempt from every gate.
pub const LOGIN_PATH: &str = "/admin/login";

/// Request extension meaning "this request targets the login page".
///
/// Only [`edge_gate`] inserts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPageMarker;

/// What the edge gate decided for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDecision {
    /// Not under `/admin`.
    Irrelevant,
    /// Exactly the login path.
    LoginPage,
    /// Protected path without a session cookie.
    Denied,
    /// Protected path with a cookie; the layout gate verifies it.
    AllowedPendingVerify,
}

/// Whether `path` is `/admin` or below it.
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    path == ADMIN_ROOT
        || path
            .strip_prefix(ADMIN_ROOT)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide what to do with `path` given whether a session cookie is present.
#[must_use]
pub fn evaluate(path: &str, has_session: bool) -> EdgeDecision {
    if !is_protected_path(path) {
        return EdgeDecision::Irrelevant;
    }
    if path == LOGIN_PATH {
        return EdgeDecision::LoginPage;
    }
    if has_session {
        EdgeDecision::AllowedPendingVerify
    } else {
        EdgeDecision::Denied
    }
}

/// Middleware wrapping the whole router.
pub async fn edge_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    // Only this gate may mark a request.
    request.extensions_mut().remove::<LoginPageMarker>();

    let path = request.uri().path().to_owned();
    let has_session = if is_protected_path(&path) && path != LOGIN_PATH {
        authenticate(&jar, &state, Strictness::Presence).await.is_some()
    } else {
        false
    };

    match evaluate(&path, has_session) {
        EdgeDecision::Irrelevant | EdgeDecision::AllowedPendingVerify => next.run(request).await,
        EdgeDecision::LoginPage => {
            request.extensions_mut().insert(LoginPageMarker);
            next.run(request).await
        }
        EdgeDecision::Denied => {
            tracing::debug!(path = %path, "No admin session, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}
