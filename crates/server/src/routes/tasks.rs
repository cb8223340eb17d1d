//! Task route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use community_plant_core::{NewTask, TaskId, TaskResponse};

use super::require_text;
use crate::db::TaskRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the task router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list).post(create))
        .route("/tasks/{id}", get(show).put(update).delete(remove))
}

/// GET /tasks
#[instrument(skip_all)]
async fn list(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = TaskRepository::new(state.pool()).list_all().await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

/// GET /tasks/{id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = TaskRepository::new(state.pool())
        .get_by_id(TaskId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("task {id}")))?;

    Ok(Json(task.into()))
}

/// POST /tasks
#[instrument(skip_all)]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewTask>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    require_text("title", &input.title)?;

    let task = TaskRepository::new(state.pool()).create(&input).await?;
    tracing::info!(task_id = %task.id, garden_id = %task.garden_id, "Task created");

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// PUT /tasks/{id}
#[instrument(skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewTask>,
) -> Result<Json<TaskResponse>, AppError> {
    require_text("title", &input.title)?;

    let task = TaskRepository::new(state.pool())
        .update(TaskId::new(id), &input)
        .await?;

    Ok(Json(task.into()))
}

/// DELETE /tasks/{id}
#[instrument(skip(state))]
async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    TaskRepository::new(state.pool())
        .delete(TaskId::new(id))
        .await?;
    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
