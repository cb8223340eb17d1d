//! Task history route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use community_plant_core::{NewTaskHistory, TaskHistoryId, TaskHistoryResponse};

use super::require_text;
use crate::db::TaskHistoryRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the task history router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/task-histories", get(list).post(create))
        .route("/task-histories/{id}", get(show).put(update).delete(remove))
}

fn validate(input: &NewTaskHistory) -> Result<(), AppError> {
    if let Some(note) = &input.note {
        require_text("note", note)?;
    }
    Ok(())
}

/// GET /task-histories
#[instrument(skip_all)]
async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskHistoryResponse>>, AppError> {
    let entries = TaskHistoryRepository::new(state.pool()).list_all().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// GET /task-histories/{id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TaskHistoryResponse>, AppError> {
    let entry = TaskHistoryRepository::new(state.pool())
        .get_by_id(TaskHistoryId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("task history {id}")))?;

    Ok(Json(entry.into()))
}

/// POST /task-histories
#[instrument(skip_all)]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewTaskHistory>,
) -> Result<(StatusCode, Json<TaskHistoryResponse>), AppError> {
    validate(&input)?;

    let entry = TaskHistoryRepository::new(state.pool())
        .create(&input)
        .await?;
    tracing::info!(task_history_id = %entry.id, task_id = %entry.task_id, "Task history recorded");

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// PUT /task-histories/{id}
#[instrument(skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewTaskHistory>,
) -> Result<Json<TaskHistoryResponse>, AppError> {
    validate(&input)?;

    let entry = TaskHistoryRepository::new(state.pool())
        .update(TaskHistoryId::new(id), &input)
        .await?;

    Ok(Json(entry.into()))
}

/// DELETE /task-histories/{id}
#[instrument(skip(state))]
async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    TaskHistoryRepository::new(state.pool())
        .delete(TaskHistoryId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
