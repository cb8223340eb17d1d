//! Weather observation route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use tracing::instrument;

use community_plant_core::{NewWeatherData, WeatherDataId, WeatherDataResponse};

use super::require_numeric;
use crate::db::WeatherDataRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the weather data router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weather-data", get(list).post(create))
        .route("/weather-data/{id}", get(show).put(update).delete(remove))
}

fn validate(input: &NewWeatherData) -> Result<(), AppError> {
    // temperature_c NUMERIC(5, 2)
    require_numeric("temperature_c", input.temperature_c, 3)?;
    if input
        .humidity_pct
        .is_some_and(|h| h < Decimal::ZERO || h > Decimal::ONE_HUNDRED)
    {
        return Err(AppError::BadRequest(
            "humidity_pct must be between 0 and 100".to_string(),
        ));
    }
    if input.precipitation_mm.is_some_and(|p| p < Decimal::ZERO) {
        return Err(AppError::BadRequest(
            "precipitation_mm must not be negative".to_string(),
        ));
    }
    if let Some(precipitation) = input.precipitation_mm {
        // precipitation_mm NUMERIC(7, 2)
        require_numeric("precipitation_mm", precipitation, 5)?;
    }
    Ok(())
}

/// GET /weather-data
#[instrument(skip_all)]
async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherDataResponse>>, AppError> {
    let observations = WeatherDataRepository::new(state.pool()).list_all().await?;
    Ok(Json(observations.into_iter().map(Into::into).collect()))
}

/// GET /weather-data/{id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<WeatherDataResponse>, AppError> {
    let observation = WeatherDataRepository::new(state.pool())
        .get_by_id(WeatherDataId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("weather data {id}")))?;

    Ok(Json(observation.into()))
}

/// POST /weather-data
#[instrument(skip_all)]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewWeatherData>,
) -> Result<(StatusCode, Json<WeatherDataResponse>), AppError> {
    validate(&input)?;

    let observation = WeatherDataRepository::new(state.pool())
        .create(&input)
        .await?;

    Ok((StatusCode::CREATED, Json(observation.into())))
}

/// PUT /weather-data/{id}
#[instrument(skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewWeatherData>,
) -> Result<Json<WeatherDataResponse>, AppError> {
    validate(&input)?;

    let observation = WeatherDataRepository::new(state.pool())
        .update(WeatherDataId::new(id), &input)
        .await?;

    Ok(Json(observation.into()))
}

/// DELETE /weather-data/{id}
#[instrument(skip(state))]
async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    WeatherDataRepository::new(state.pool())
        .delete(WeatherDataId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_text, json_request, send};

    #[tokio::test]
    async fn test_humidity_out_of_range_is_bad_request() {
        let response = send(json_request(
            "POST",
            "/weather-data",
            r#"{"garden_id":1,"recorded_at":"2024-05-01T06:00:00Z","temperature_c":"12.5","humidity_pct":"101"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("humidity_pct"));
    }

    #[tokio::test]
    async fn test_negative_precipitation_is_bad_request() {
        let response = send(json_request(
            "PUT",
            "/weather-data/9",
            r#"{"garden_id":1,"recorded_at":"2024-05-01T06:00:00Z","temperature_c":"-3","precipitation_mm":"-0.1"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_out_of_range_temperature_is_bad_request() {
        let response = send(json_request(
            "POST",
            "/weather-data",
            r#"{"garden_id":1,"recorded_at":"2024-05-01T06:00:00Z","temperature_c":"1000"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("temperature_c"));
    }

    #[tokio::test]
    async fn test_out_of_range_precipitation_is_bad_request() {
        let response = send(json_request(
            "PUT",
            "/weather-data/9",
            r#"{"garden_id":1,"recorded_at":"2024-05-01T06:00:00Z","temperature_c":"21.5","precipitation_mm":"100000"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("precipitation_mm"));
    }

    #[tokio::test]
    async fn test_missing_temperature_is_rejected() {
        let response = send(json_request(
            "POST",
            "/weather-data",
            r#"{"garden_id":1,"recorded_at":"2024-05-01T06:00:00Z"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
