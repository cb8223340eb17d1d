//! User route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use community_plant_core::{NewUser, UserId, UserResponse};

use super::require_text;
use crate::db::UserRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/{id}", get(show).put(update).delete(remove))
}

fn validate(input: &NewUser) -> Result<(), AppError> {
    require_text("name", &input.name)?;
    if let Some(phone) = &input.phone {
        require_text("phone", phone)?;
    }
    Ok(())
}

/// GET /users
#[instrument(skip_all)]
async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /users/{id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserRepository::new(state.pool())
        .get_by_id(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    Ok(Json(user.into()))
}

/// POST /users
#[instrument(skip_all)]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    validate(&input)?;

    let user = UserRepository::new(state.pool()).create(&input).await?;
    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /users/{id}
#[instrument(skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewUser>,
) -> Result<Json<UserResponse>, AppError> {
    validate(&input)?;

    let user = UserRepository::new(state.pool())
        .update(UserId::new(id), &input)
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
#[instrument(skip(state))]
async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
