//! Task history repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use community_plant_core::{NewTaskHistory, TaskHistory, TaskHistoryId, TaskId, TaskStatus, UserId};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct TaskHistoryRow {
    id: i32,
    task_id: i32,
    user_id: Option<i32>,
    status: TaskStatus,
    note: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl From<TaskHistoryRow> for TaskHistory {
    fn from(row: TaskHistoryRow) -> Self {
        Self {
            id: TaskHistoryId::new(row.id),
            task_id: TaskId::new(row.task_id),
            user_id: row.user_id.map(UserId::new),
            status: row.status,
            note: row.note,
            recorded_at: row.recorded_at,
        }
    }
}

const COLUMNS: &str = "id, task_id, user_id, status, note, recorded_at";

/// Repository for task history database operations.
pub struct TaskHistoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TaskHistoryRepository<'a> {
    /// Create a new task history repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<TaskHistory>, RepositoryError> {
        let rows = sqlx::query_as::<_, TaskHistoryRow>(&format!(
            "SELECT {COLUMNS} FROM task_histories ORDER BY recorded_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: TaskHistoryId,
    ) -> Result<Option<TaskHistory>, RepositoryError> {
        let row = sqlx::query_as::<_, TaskHistoryRow>(&format!(
            "SELECT {COLUMNS} FROM task_histories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Record an entry. A missing `recorded_at` defaults to now.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the task or user does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewTaskHistory) -> Result<TaskHistory, RepositoryError> {
        let row = sqlx::query_as::<_, TaskHistoryRow>(&format!(
            "INSERT INTO task_histories (task_id, user_id, status, note, recorded_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, now()))
             RETURNING {COLUMNS}"
        ))
        .bind(input.task_id)
        .bind(input.user_id)
        .bind(input.status)
        .bind(&input.note)
        .bind(input.recorded_at)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.into())
    }

    /// Replace an entry's fields. A missing `recorded_at` keeps the stored value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entry has this id.
    /// Returns `RepositoryError::InvalidReference` if the task or user does not exist.
    pub async fn update(
        &self,
        id: TaskHistoryId,
        input: &NewTaskHistory,
    ) -> Result<TaskHistory, RepositoryError> {
        let row = sqlx::query_as::<_, TaskHistoryRow>(&format!(
            "UPDATE task_histories
             SET task_id = $2, user_id = $3, status = $4, note = $5,
                 recorded_at = COALESCE($6, recorded_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(input.task_id)
        .bind(input.user_id)
        .bind(input.status)
        .bind(&input.note)
        .bind(input.recorded_at)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_write)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entry has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: TaskHistoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM task_histories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
