//! Integration tests for record CRUD.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p community-plant-server)

use reqwest::StatusCode;
use serde_json::{Value, json};

use community_plant_integration_tests::{base_url, client, unique_suffix};

async fn create_garden(name: &str) -> Value {
    let resp = client()
        .post(format!("{}/gardens", base_url()))
        .json(&json!({
            "name": name,
            "location": "12 Mill Lane",
            "area_sq_m": "450.50"
        }))
        .send()
        .await
        .expect("Failed to create garden");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse garden")
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_garden_lifecycle() {
    let name = format!("Riverside {}", unique_suffix());
    let garden = create_garden(&name).await;
    let id = garden["id"].as_i64().expect("garden id");
    assert_eq!(garden["name"], name.as_str());
    assert_eq!(garden["area_sq_m"], "450.50");

    let resp = client()
        .put(format!("{}/gardens/{id}", base_url()))
        .json(&json!({"name": name, "location": "14 Mill Lane"}))
        .send()
        .await
        .expect("Failed to update garden");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse garden");
    assert_eq!(updated["location"], "14 Mill Lane");
    assert_eq!(updated["area_sq_m"], Value::Null);

    let resp = client()
        .delete(format!("{}/gardens/{id}", base_url()))
        .send()
        .await
        .expect("Failed to delete garden");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client()
        .get(format!("{}/gardens/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get garden");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_task_and_history_flow() {
    let garden = create_garden(&format!("Allotment {}", unique_suffix())).await;
    let garden_id = garden["id"].as_i64().expect("garden id");

    let resp = client()
        .post(format!("{}/tasks", base_url()))
        .json(&json!({
            "garden_id": garden_id,
            "title": "Turn compost",
            "due_date": "2024-05-10"
        }))
        .send()
        .await
        .expect("Failed to create task");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let task: Value = resp.json().await.expect("Failed to parse task");
    assert_eq!(task["status"], "pending");
    assert_eq!(task["due_date"], "2024-05-10");

    let resp = client()
        .post(format!("{}/task-histories", base_url()))
        .json(&json!({
            "task_id": task["id"],
            "status": "completed",
            "note": "Done before the rain"
        }))
        .send()
        .await
        .expect("Failed to record history");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let entry: Value = resp.json().await.expect("Failed to parse history");
    assert_eq!(entry["status"], "completed");
    assert!(entry["recorded_at"].is_string());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_task_for_missing_garden_is_bad_request() {
    let resp = client()
        .post(format!("{}/tasks", base_url()))
        .json(&json!({"garden_id": i32::MAX, "title": "Orphan"}))
        .send()
        .await
        .expect("Failed to create task");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_duplicate_user_email_conflicts() {
    let email = format!("ana-{}@garden.org", unique_suffix());
    let body = json!({"name": "Ana", "email": email, "user_type": "gardener"});

    let first = client()
        .post(format!("{}/users", base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client()
        .post(format!("{}/users", base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(second.status(), StatusCode::CONFLICT);
}
