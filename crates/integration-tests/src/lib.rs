//! Integration tests for Community Plant.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server with migrations and seeds
//! RUN_MIGRATIONS=true cargo run -p community-plant-server
//!
//! # Run the ignored tests against it
//! cargo test -p community-plant-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `SERVER_BASE_URL` - Server under test (default `http://localhost:3000`)
//! - `DATABASE_URL` - Same database the server uses, for direct setup

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use secrecy::SecretString;
use sqlx::PgPool;

/// Base URL for the server under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("SERVER_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Plain JSON client; the API has no sessions.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect to the server's database for test setup.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the database is unreachable.
pub async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    community_plant_server::db::create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to database")
}

/// Suffix that keeps emails and names unique across runs.
#[must_use]
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos:x}")
}
