//! Login page and form login/logout.
//!
//! The JSON equivalents live in [`super::api::auth`].

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::render;
use crate::filters;
use crate::middleware::{ADMIN_ROOT, LOGIN_PATH};
use crate::services::auth::AdminAuthService;
use crate::state::AppState;

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginPageTemplate {
    error: Option<String>,
    email: String,
}

/// Form body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Render the login page.
///
/// GET /admin/login
pub async fn login_page() -> Response {
    render(&LoginPageTemplate {
        error: None,
        email: String::new(),
    })
    .into_response()
}

/// Form login.
///
/// POST /admin/login
pub async fn login_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let service = AdminAuthService::new(state.admins());

    match service.login(&form.email, &form.password).await {
        Ok(admin) => {
            let jar = state.session_cookies().issue(jar, admin.id);
            (jar, Redirect::to(ADMIN_ROOT)).into_response()
        }
        Err(e) => {
            let page = render(&LoginPageTemplate {
                error: Some(e.to_string()),
                email: form.email.trim().to_string(),
            });
            (e.status(), page).into_response()
        }
    }
}

/// Logout and clear the session cookie.
///
/// POST /admin/logout
pub async fn logout_form(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = state.session_cookies().revoke(jar);
    (jar, Redirect::to(LOGIN_PATH))
}
