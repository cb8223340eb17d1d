//! Community Plant server library.
//!
//! HTTP API, `PostgreSQL` persistence, seed loading and authentication,
//! exposed as a library so the CLI and tests can reuse them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
