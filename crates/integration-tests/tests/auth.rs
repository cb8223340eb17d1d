//! Integration tests for administrator login.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and seeds applied
//! - The server running (cargo run -p community-plant-server)
//! - `BOOTSTRAP_ADMIN_PASSWORD` unset, so the seeded placeholder is in place

use reqwest::StatusCode;
use serde_json::{Value, json};

use community_plant_core::UserType;
use community_plant_integration_tests::{base_url, client, pool, unique_suffix};
use community_plant_server::services::auth::AuthService;

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_seeded_placeholder_does_not_authenticate() {
    let resp = client()
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({"email": "adm@adm.com", "password": "123"}))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_with_derived_credential() {
    let pool = pool().await;
    let email = format!("ops-{}@garden.org", unique_suffix());
    AuthService::new(&pool)
        .create_administrator(&email, "hunter2-hunter2", UserType::Administrator)
        .await
        .expect("Failed to create administrator");

    let resp = client()
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({"email": email, "password": "hunter2-hunter2"}))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["role"], "administrator");
    assert!(body.get("credential").is_none());

    let resp = client()
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({"email": email, "password": "hunter3-hunter3"}))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_unknown_email_matches_wrong_password_response() {
    let resp = client()
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({"email": format!("nobody-{}@garden.org", unique_suffix()), "password": "whatever"}))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_readiness_reports_database() {
    let resp = client()
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to send readiness request");

    assert_eq!(resp.status(), StatusCode::OK);
}
