//! Login route.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use tracing::instrument;

use community_plant_core::AdministratorResponse;

use crate::error::AppError;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Verify an administrator's email and password.
///
/// POST /auth/login
///
/// Returns the administrator's public shape on success. No session is
/// created.
#[instrument(skip_all)]
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AdministratorResponse>, AppError> {
    let admin = AuthService::new(state.pool())
        .login(&body.email, &body.password)
        .await?;

    Ok(Json(admin.into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::routes::test_support::{body_text, json_request, send};

    #[tokio::test]
    async fn test_malformed_email_is_bad_request() {
        let response = send(json_request(
            "POST",
            "/auth/login",
            r#"{"email":"not-an-email","password":"hunter2"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("invalid email"));
    }

    #[tokio::test]
    async fn test_missing_password_is_rejected() {
        let response = send(json_request(
            "POST",
            "/auth/login",
            r#"{"email":"adm@adm.com"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_login_request_debug_redacts_password() {
        let request = LoginRequest {
            email: "adm@adm.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("adm@adm.com"));
        assert!(!debug.contains("hunter2"));
    }
}
