//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, start transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded on the span)
//! 4. Security headers
//! 5. Edge gate (cookie presence for `/admin/**`, tags the login page)
//! 6. Layout gate (`route_layer` on pages only, full session check)
//!
//! JSON API handlers don't depend on 5 or 6; they use [`RequireAdmin`].

pub mod auth;
pub mod edge;
pub mod layout;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{
    Authenticated, LayoutAdmin, RedirectToLogin, RequireAdmin, Strictness, authenticate,
    resolve_session,
};
pub use edge::{ADMIN_ROOT, EdgeDecision, LOGIN_PATH, LoginPageMarker, edge_gate, evaluate};
pub use layout::layout_gate;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{ADMIN_SESSION_COOKIE, SESSION_MAX_AGE_SECS, SessionCookies};
