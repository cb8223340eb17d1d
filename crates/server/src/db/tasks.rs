//! Garden task repository.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use community_plant_core::{GardenId, NewTask, Task, TaskId, TaskStatus, UserId};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: i32,
    garden_id: i32,
    assigned_user_id: Option<i32>,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: TaskId::new(row.id),
            garden_id: GardenId::new(row.garden_id),
            assigned_user_id: row.assigned_user_id.map(UserId::new),
            title: row.title,
            description: row.description,
            status: row.status,
            due_date: row.due_date,
            created_at: row.created_at,
        }
    }
}

const COLUMNS: &str =
    "id, garden_id, assigned_user_id, title, description, status, due_date, created_at";

/// Repository for task database operations.
pub struct TaskRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TaskRepository<'a> {
    /// Create a new task repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tasks, soonest due first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let rows = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {COLUMNS} FROM tasks ORDER BY due_date NULLS LAST, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a task by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {COLUMNS} FROM tasks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a task.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the garden or user does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewTask) -> Result<Task, RepositoryError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "INSERT INTO tasks (garden_id, assigned_user_id, title, description, status, due_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        ))
        .bind(input.garden_id)
        .bind(input.assigned_user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status)
        .bind(input.due_date)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.into())
    }

    /// Replace a task's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no task has this id.
    /// Returns `RepositoryError::InvalidReference` if the garden or user does not exist.
    pub async fn update(&self, id: TaskId, input: &NewTask) -> Result<Task, RepositoryError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "UPDATE tasks
             SET garden_id = $2, assigned_user_id = $3, title = $4,
                 description = $5, status = $6, due_date = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(input.garden_id)
        .bind(input.assigned_user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status)
        .bind(input.due_date)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_write)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a task and its history.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no task has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: TaskId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
