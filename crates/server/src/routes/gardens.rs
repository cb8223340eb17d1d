//! Garden route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use tracing::instrument;

use community_plant_core::{GardenId, GardenResponse, NewGarden};

use super::{require_numeric, require_text};
use crate::db::GardenRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the garden router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gardens", get(list).post(create))
        .route("/gardens/{id}", get(show).put(update).delete(remove))
}

fn validate(input: &NewGarden) -> Result<(), AppError> {
    require_text("name", &input.name)?;
    require_text("location", &input.location)?;
    if input.area_sq_m.is_some_and(|area| area < Decimal::ZERO) {
        return Err(AppError::BadRequest(
            "area_sq_m must not be negative".to_string(),
        ));
    }
    if let Some(area) = input.area_sq_m {
        // area_sq_m NUMERIC(12, 2)
        require_numeric("area_sq_m", area, 10)?;
    }
    Ok(())
}

/// GET /gardens
#[instrument(skip_all)]
async fn list(State(state): State<AppState>) -> Result<Json<Vec<GardenResponse>>, AppError> {
    let gardens = GardenRepository::new(state.pool()).list_all().await?;
    Ok(Json(gardens.into_iter().map(Into::into).collect()))
}

/// GET /gardens/{id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GardenResponse>, AppError> {
    let garden = GardenRepository::new(state.pool())
        .get_by_id(GardenId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("garden {id}")))?;

    Ok(Json(garden.into()))
}

/// POST /gardens
#[instrument(skip_all)]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewGarden>,
) -> Result<(StatusCode, Json<GardenResponse>), AppError> {
    validate(&input)?;

    let garden = GardenRepository::new(state.pool()).create(&input).await?;
    tracing::info!(garden_id = %garden.id, "Garden created");

    Ok((StatusCode::CREATED, Json(garden.into())))
}

/// PUT /gardens/{id}
#[instrument(skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewGarden>,
) -> Result<Json<GardenResponse>, AppError> {
    validate(&input)?;

    let garden = GardenRepository::new(state.pool())
        .update(GardenId::new(id), &input)
        .await?;

    Ok(Json(garden.into()))
}

/// DELETE /gardens/{id}
#[instrument(skip(state))]
async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    GardenRepository::new(state.pool())
        .delete(GardenId::new(id))
        .await?;
    tracing::info!(garden_id = id, "Garden deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_text, json_request, send};

    fn garden(name: &str, location: &str, area: Option<Decimal>) -> NewGarden {
        NewGarden {
            name: name.to_string(),
            location: location.to_string(),
            description: None,
            area_sq_m: area,
        }
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert!(validate(&garden("Riverside", "12 Mill Lane", None)).is_ok());
        assert!(validate(&garden("Riverside", "12 Mill Lane", Some(Decimal::ZERO))).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_and_negative() {
        assert!(validate(&garden("", "12 Mill Lane", None)).is_err());
        assert!(validate(&garden("Riverside", "  ", None)).is_err());
        assert!(validate(&garden("Riverside", "12 Mill Lane", Some(Decimal::NEGATIVE_ONE))).is_err());
    }

    #[tokio::test]
    async fn test_create_with_blank_name_is_bad_request() {
        let response = send(json_request(
            "POST",
            "/gardens",
            r#"{"name":" ","location":"12 Mill Lane"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Bad request: name must not be blank"
        );
    }

    #[tokio::test]
    async fn test_update_with_negative_area_is_bad_request() {
        let response = send(json_request(
            "PUT",
            "/gardens/3",
            r#"{"name":"Riverside","location":"12 Mill Lane","area_sq_m":"-4"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validate_area_fits_column() {
        let largest = Decimal::new(999_999_999_999, 2);
        assert!(validate(&garden("Riverside", "12 Mill Lane", Some(largest))).is_ok());
        let too_large = Decimal::from(10_000_000_000_u64);
        assert!(validate(&garden("Riverside", "12 Mill Lane", Some(too_large))).is_err());
    }

    #[tokio::test]
    async fn test_create_with_oversized_area_is_bad_request() {
        let response = send(json_request(
            "POST",
            "/gardens",
            r#"{"name":"Riverside","location":"12 Mill Lane","area_sq_m":"99999999999999"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("area_sq_m"));
    }
}
