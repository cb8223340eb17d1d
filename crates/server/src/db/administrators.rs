//! Administrator repository.
//!
//! Reads and writes identity records. Credentials are stored exactly as held
//! by [`Credential`]; this module never derives or compares them.

use sqlx::PgPool;

use community_plant_core::{
    Administrator, AdministratorId, Credential, Email, NewAdministrator, UserType,
};

use super::RepositoryError;

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct AdministratorRow {
    id: i32,
    email: String,
    credential: Credential,
    role: UserType,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = RepositoryError;

    fn try_from(row: AdministratorRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdministratorId::new(row.id),
            email,
            credential: row.credential,
            role: row.role,
        })
    }
}

const COLUMNS: &str = "id, email, credential, role";

// =============================================================================
// Repository
// =============================================================================

/// Repository for administrator database operations.
pub struct AdministratorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdministratorRepository<'a> {
    /// Create a new administrator repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all administrators ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Administrator>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdministratorRow>(&format!(
            "SELECT {COLUMNS} FROM administrators ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an administrator by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(
        &self,
        id: AdministratorId,
    ) -> Result<Option<Administrator>, RepositoryError> {
        let row = sqlx::query_as::<_, AdministratorRow>(&format!(
            "SELECT {COLUMNS} FROM administrators WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an administrator by email (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Administrator>, RepositoryError> {
        let row = sqlx::query_as::<_, AdministratorRow>(&format!(
            "SELECT {COLUMNS} FROM administrators WHERE lower(email) = lower($1)"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a new administrator; the database assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewAdministrator) -> Result<Administrator, RepositoryError> {
        let row = sqlx::query_as::<_, AdministratorRow>(&format!(
            "INSERT INTO administrators (email, credential, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        ))
        .bind(&input.email)
        .bind(&input.credential)
        .bind(input.role)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        row.try_into()
    }

    /// Update email and role. The credential is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no administrator has this id.
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    pub async fn update(
        &self,
        id: AdministratorId,
        email: &Email,
        role: UserType,
    ) -> Result<Administrator, RepositoryError> {
        let row = sqlx::query_as::<_, AdministratorRow>(&format!(
            "UPDATE administrators
             SET email = $2, role = $3, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(email)
        .bind(role)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_write)?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Replace the stored credential.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no administrator has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_credential(
        &self,
        id: AdministratorId,
        credential: &Credential,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE administrators SET credential = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(credential)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete an administrator.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no administrator has this id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: AdministratorId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM administrators WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
