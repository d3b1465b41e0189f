//! Wanderlust Core - Shared types library.
//!
//! This crate provides common types used across the Wanderlust back office:
//! - `admin` - Administration server (session gate, content screens, JSON API)
//! - `cli` - Command-line tools for migrations and admin provisioning
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. Database encoding is available behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
