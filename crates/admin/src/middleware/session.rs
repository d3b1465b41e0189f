//! Admin session cookie.
//!
//! There is no server-side session table. The cookie value is the admin's
//! ID, and a session is valid exactly as long as that ID still resolves to an
//! admin row (see [`super::auth`]).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use wanderlust_core::AdminId;

/// Name of the admin session cookie.
pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

/// Cookie lifetime: 7 days.
pub const SESSION_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Issues, reads and revokes the admin session cookie.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    /// `secure` controls the `Secure` attribute; set it when serving over HTTPS.
    #[must_use]
    pub const fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Add the session cookie for `admin_id` to the outgoing jar.
    #[must_use]
    pub fn issue(&self, jar: CookieJar, admin_id: AdminId) -> CookieJar {
        let cookie = Cookie::build((ADMIN_SESSION_COOKIE, admin_id.to_string()))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(SESSION_MAX_AGE_SECS))
            .path("/");

        jar.add(cookie)
    }

    /// Read the admin ID from the incoming jar.
    ///
    /// Missing, empty or malformed values are all `None`. Never touches the
    /// database.
    #[must_use]
    pub fn read(jar: &CookieJar) -> Option<AdminId> {
        let value = jar.get(ADMIN_SESSION_COOKIE)?.value();
        if value.is_empty() {
            return None;
        }
        AdminId::parse(value).ok()
    }

    /// Emit a removal cookie. Safe to call with no cookie present.
    #[must_use]
    pub fn revoke(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(ADMIN_SESSION_COOKIE).path("/"))
    }
}
