//! Administrator management commands.
//!
//! # Usage
//!
//! ```bash
//! cp-cli admin create -e ops@garden.org -p 'long-password' -r administrator
//! cp-cli admin set-password -e adm@adm.com -p 'long-password'
//! cp-cli admin verify -e adm@adm.com -p 'long-password'
//! cp-cli admin list
//! cp-cli admin show 1
//! cp-cli admin update 2 -e ops@garden.org -r gardener
//! cp-cli admin delete 2
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

use thiserror::Error;

use community_plant_core::{AdministratorId, Email, EmailError, UserType};
use community_plant_server::db::{AdministratorRepository, RepositoryError};
use community_plant_server::services::auth::{AuthError, AuthService};

/// Errors that can occur during administrator commands.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: administrator, gardener, volunteer")]
    InvalidRole(String),

    /// The password does not match the stored credential.
    #[error("Password does not match for {0}")]
    Mismatch(String),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No administrator has this id.
    #[error("Administrator {0} not found")]
    NotFound(i32),

    /// Authentication service error.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Repository error.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl AdminError {
    fn from_repository(id: i32, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

fn parse_role(role: &str) -> Result<UserType, AdminError> {
    role.parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))
}

/// Create a new administrator.
///
/// # Errors
///
/// Returns an error if the role or email is invalid, the password is too
/// short, or the email is already registered.
pub async fn create(
    email: &str,
    password: &str,
    role: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = parse_role(role)?;
    let pool = super::connect().await?;

    let admin = AuthService::new(&pool)
        .create_administrator(email, password, role)
        .await
        .map_err(AdminError::from)?;

    tracing::info!(
        "Administrator created successfully! ID: {}, Email: {}, Role: {}",
        admin.id,
        admin.email,
        admin.role
    );
    Ok(())
}

/// Replace an administrator's credential with the digest of `password`.
///
/// # Errors
///
/// Returns an error if the administrator does not exist or the password is
/// too short.
pub async fn set_password(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    AuthService::new(&pool)
        .set_credential(email, password)
        .await
        .map_err(AdminError::from)?;

    tracing::info!("Credential updated for {email}");
    Ok(())
}

/// Check `password` against the stored credential.
///
/// # Errors
///
/// Returns `AdminError::Mismatch` if the password does not match or the
/// email is unknown.
pub async fn verify(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    match AuthService::new(&pool).login(email, password).await {
        Ok(admin) => {
            tracing::info!("Password matches for {} (ID: {})", admin.email, admin.id);
            Ok(())
        }
        Err(AuthError::InvalidCredentials) => Err(AdminError::Mismatch(email.to_owned()).into()),
        Err(e) => Err(AdminError::Auth(e).into()),
    }
}

/// List all administrators. Credentials are never printed.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    let admins = AdministratorRepository::new(&pool)
        .list_all()
        .await
        .map_err(AdminError::Repository)?;

    if admins.is_empty() {
        tracing::info!("No administrators found");
        return Ok(());
    }

    tracing::info!("Found {} administrator(s):", admins.len());
    for admin in admins {
        tracing::info!("  ID: {}, Email: {}, Role: {}", admin.id, admin.email, admin.role);
    }
    Ok(())
}

/// Show one administrator.
///
/// # Errors
///
/// Returns `AdminError::NotFound` if no administrator has this id.
pub async fn show(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    let admin = AdministratorRepository::new(&pool)
        .get_by_id(AdministratorId::new(id))
        .await
        .map_err(AdminError::Repository)?
        .ok_or(AdminError::NotFound(id))?;

    tracing::info!(
        "ID: {}, Email: {}, Role: {}, Derived credential: {}",
        admin.id,
        admin.email,
        admin.role,
        admin.has_derived_credential()
    );
    Ok(())
}

/// Change an administrator's email and role. The credential is untouched.
///
/// # Errors
///
/// Returns an error if the email or role is invalid, the administrator does
/// not exist, or the email belongs to another administrator.
pub async fn update(id: i32, email: &str, role: &str) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email).map_err(AdminError::from)?;
    let role = parse_role(role)?;
    let pool = super::connect().await?;

    let admin = AdministratorRepository::new(&pool)
        .update(AdministratorId::new(id), &email, role)
        .await
        .map_err(|e| AdminError::from_repository(id, e))?;

    tracing::info!(
        "Administrator updated! ID: {}, Email: {}, Role: {}",
        admin.id,
        admin.email,
        admin.role
    );
    Ok(())
}

/// Delete an administrator.
///
/// # Errors
///
/// Returns `AdminError::NotFound` if no administrator has this id.
pub async fn delete(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    AdministratorRepository::new(&pool)
        .delete(AdministratorId::new(id))
        .await
        .map_err(|e| AdminError::from_repository(id, e))?;

    tracing::info!("Administrator {id} deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert!(matches!(parse_role("administrator"), Ok(UserType::Administrator)));
        assert!(matches!(parse_role("volunteer"), Ok(UserType::Volunteer)));
        assert!(matches!(
            parse_role("super_admin"),
            Err(AdminError::InvalidRole(r)) if r == "super_admin"
        ));
    }

    #[test]
    fn test_repository_not_found_names_the_id() {
        let err = AdminError::from_repository(7, RepositoryError::NotFound);
        assert!(matches!(err, AdminError::NotFound(7)));
        assert_eq!(err.to_string(), "Administrator 7 not found");

        let err = AdminError::from_repository(7, RepositoryError::Conflict("dup".to_string()));
        assert!(matches!(err, AdminError::Repository(RepositoryError::Conflict(_))));
    }
}
