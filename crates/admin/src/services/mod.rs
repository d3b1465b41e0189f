//! Business logic services for admin.
//!
//! - `auth` - Password hashing and email/password login

pub mod auth;

pub use auth::{AdminAuthError, AdminAuthService, hash_password, verify_password};
