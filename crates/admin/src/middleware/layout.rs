//! Layout gate for admin pages.
//!
//! Applied as a `route_layer` on the page router, so it runs once per page
//! render after routing. Performs the full session check and hands the
//! resolved admin to handlers through request extensions (read it with
//! [`super::LayoutAdmin`]).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use super::auth::resolve_session;
use super::edge::{LOGIN_PATH, LoginPageMarker};
use crate::state::AppState;

/// Middleware guarding every page in the admin layout.
pub async fn layout_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<LoginPageMarker>().is_some() {
        return next.run(request).await;
    }

    let Some(admin) = resolve_session(&jar, &state).await else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(admin.id.to_string()),
            ..Default::default()
        }));
    });

    request.extensions_mut().insert(admin);
    next.run(request).await
}
