//! Garden repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use community_plant_core::{Garden, GardenId, NewGarden};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct GardenRow {
    id: i32,
    name: String,
    location: String,
    description: Option<String>,
    area_sq_m: Option<Decimal>,
    created_at: DateTime<Utc>,
}

impl From<GardenRow> for Garden {
    fn from(row: GardenRow) -> Self {
        Self {
            id: GardenId::new(row.id),
            name: row.name,
            location: row.location,
            description: row.description,
            area_sq_m: row.area_sq_m,
            created_at: row.created_at,
        }
    }
}

const COLUMNS: &str = "id, name, location, description, area_sq_m, created_at";

/// Repository for garden database operations.
pub struct GardenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GardenRepository<'a> {
    /// Create a new garden repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all gardens ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Garden>, RepositoryError> {
        let rows = sqlx::query_as::<_, GardenRow>(&format!(
            "SELECT {COLUMNS} FROM gardens ORDER BY name, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a garden by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: GardenId) -> Result<Option<Garden>, RepositoryError> {
        let row = sqlx::query_as::<_, GardenRow>(&format!(
            "SELECT {COLUMNS} FROM gardens WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a garden.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewGarden) -> Result<Garden, RepositoryError> {
        let row = sqlx::query_as::<_, GardenRow>(&format!(
            "INSERT INTO gardens (name, location, description, area_sq_m)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.location)
        .bind(&input.description)
        .bind(input.area_sq_m)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.into())
    }

    /// Replace a garden's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no garden has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(&self, id: GardenId, input: &NewGarden) -> Result<Garden, RepositoryError> {
        let row = sqlx::query_as::<_, GardenRow>(&format!(
            "UPDATE gardens
             SET name = $2, location = $3, description = $4, area_sq_m = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.location)
        .bind(&input.description)
        .bind(input.area_sq_m)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_write)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a garden. Its tasks and weather observations go with it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no garden has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: GardenId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM gardens WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
