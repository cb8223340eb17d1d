//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Liveness check
//! GET    /health/ready           - Readiness check (database ping)
//!
//! # Auth
//! POST   /auth/login             - Verify email + password
//!
//! # Records (same five routes for each)
//! GET    /gardens                - List
//! POST   /gardens                - Create
//! GET    /gardens/{id}           - Get
//! PUT    /gardens/{id}           - Update
//! DELETE /gardens/{id}           - Delete
//!
//! /users, /tasks, /task-histories, /weather-data
//! ```

pub mod auth;
pub mod gardens;
pub mod health;
pub mod task_histories;
pub mod tasks;
pub mod users;
pub mod weather_data;

use axum::Router;
use rust_decimal::Decimal;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::state::AppState;

/// Build the route table without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(gardens::router())
        .merge(users::router())
        .merge(tasks::router())
        .merge(task_histories::router())
        .merge(weather_data::router())
}

/// Build the complete application with tracing and Sentry layers.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Reject a required text field that is empty or whitespace.
fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Reject a decimal that would overflow a `NUMERIC(p, 2)` column with
/// `integer_digits = p - 2`. The value is rounded to the column scale first.
fn require_numeric(field: &str, value: Decimal, integer_digits: u32) -> Result<(), AppError> {
    let limit = Decimal::from(10_u64.pow(integer_digits));
    if value.round_dp(2).abs() >= limit {
        return Err(AppError::BadRequest(format!(
            "{field} must be less than {limit} in magnitude"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::state::AppState;

    /// State backed by a pool that never connects unless a query runs.
    pub fn lazy_state() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/unreachable")
            .unwrap();
        AppState::new(pool)
    }

    pub async fn send(request: Request<Body>) -> Response<Body> {
        super::routes()
            .with_state(lazy_state())
            .oneshot(request)
            .await
            .unwrap()
    }

    pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    use super::test_support::send;
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Riverside").is_ok());
        assert!(matches!(
            require_text("name", "   "),
            Err(AppError::BadRequest(msg)) if msg == "name must not be blank"
        ));
    }

    #[test]
    fn test_require_numeric() {
        assert!(require_numeric("temperature_c", Decimal::new(-99_999, 2), 3).is_ok());
        assert!(require_numeric("temperature_c", Decimal::new(99_999, 2), 3).is_ok());
        assert!(require_numeric("temperature_c", Decimal::from(1000), 3).is_err());
        assert!(require_numeric("temperature_c", Decimal::from(-1000), 3).is_err());
        // 999.999 rounds to 1000.00
        assert!(matches!(
            require_numeric("temperature_c", Decimal::new(999_999, 3), 3),
            Err(AppError::BadRequest(msg)) if msg == "temperature_c must be less than 1000 in magnitude"
        ));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = send(
            Request::builder()
                .uri("/compost-bins")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let response = send(
            Request::builder()
                .uri("/gardens/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
