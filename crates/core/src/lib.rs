//! Community Plant Core - Shared domain library.
//!
//! This crate provides the types used across all Community Plant components:
//! - `server` - HTTP API and `PostgreSQL` persistence
//! - `cli` - Command-line tools for migrations, seeding and administrators
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. The optional `postgres` feature adds `sqlx`
//! encode/decode support for the newtypes and enums.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, credentials and closed enums
//! - [`models`] - Entities, including the [`Administrator`] identity record
//! - [`conversions`] - Field-by-field mapping between entities and transfer shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod conversions;
pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
