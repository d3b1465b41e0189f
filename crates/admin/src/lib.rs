//! Wanderlust Admin library.
//!
//! The travel back office as a library, so the router can be driven from
//! tests without a network or database.
//!
//! # Sessions
//!
//! A session is the `admin_session` cookie holding the admin's ID. It is
//! valid exactly while that ID resolves to an admin row. Two gates protect
//! the `/admin` page tree:
//!
//! - [`middleware::edge_gate`] checks that a cookie is present and tags the login page
//! - [`middleware::layout_gate`] resolves the cookie against the admin store
//!
//! JSON endpoints under `/api/admin` resolve the session themselves through
//! [`middleware::RequireAdmin`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::router;
