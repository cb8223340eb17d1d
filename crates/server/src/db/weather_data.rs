//! Weather observation repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use community_plant_core::{GardenId, NewWeatherData, WeatherData, WeatherDataId};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct WeatherDataRow {
    id: i32,
    garden_id: i32,
    recorded_at: DateTime<Utc>,
    temperature_c: Decimal,
    humidity_pct: Option<Decimal>,
    precipitation_mm: Option<Decimal>,
    conditions: Option<String>,
}

impl From<WeatherDataRow> for WeatherData {
    fn from(row: WeatherDataRow) -> Self {
        Self {
            id: WeatherDataId::new(row.id),
            garden_id: GardenId::new(row.garden_id),
            recorded_at: row.recorded_at,
            temperature_c: row.temperature_c,
            humidity_pct: row.humidity_pct,
            precipitation_mm: row.precipitation_mm,
            conditions: row.conditions,
        }
    }
}

const COLUMNS: &str =
    "id, garden_id, recorded_at, temperature_c, humidity_pct, precipitation_mm, conditions";

/// Repository for weather observation database operations.
pub struct WeatherDataRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WeatherDataRepository<'a> {
    /// Create a new weather observation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all observations, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<WeatherData>, RepositoryError> {
        let rows = sqlx::query_as::<_, WeatherDataRow>(&format!(
            "SELECT {COLUMNS} FROM weather_data ORDER BY recorded_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get an observation by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(
        &self,
        id: WeatherDataId,
    ) -> Result<Option<WeatherData>, RepositoryError> {
        let row = sqlx::query_as::<_, WeatherDataRow>(&format!(
            "SELECT {COLUMNS} FROM weather_data WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Record an observation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the garden does not exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewWeatherData) -> Result<WeatherData, RepositoryError> {
        let row = sqlx::query_as::<_, WeatherDataRow>(&format!(
            "INSERT INTO weather_data
                 (garden_id, recorded_at, temperature_c, humidity_pct, precipitation_mm, conditions)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        ))
        .bind(input.garden_id)
        .bind(input.recorded_at)
        .bind(input.temperature_c)
        .bind(input.humidity_pct)
        .bind(input.precipitation_mm)
        .bind(&input.conditions)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.into())
    }

    /// Replace an observation's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no observation has this id.
    /// Returns `RepositoryError::InvalidReference` if the garden does not exist.
    pub async fn update(
        &self,
        id: WeatherDataId,
        input: &NewWeatherData,
    ) -> Result<WeatherData, RepositoryError> {
        let row = sqlx::query_as::<_, WeatherDataRow>(&format!(
            "UPDATE weather_data
             SET garden_id = $2, recorded_at = $3, temperature_c = $4,
                 humidity_pct = $5, precipitation_mm = $6, conditions = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(input.garden_id)
        .bind(input.recorded_at)
        .bind(input.temperature_c)
        .bind(input.humidity_pct)
        .bind(input.precipitation_mm)
        .bind(&input.conditions)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_write)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete an observation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no observation has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: WeatherDataId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM weather_data WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
