//! Authentication service.
//!
//! Password login against administrator records. Credentials are derived
//! and compared by [`community_plant_core::Credential`]; this service only
//! looks records up and persists new digests.

mod error;

pub use error::AuthError;

use sqlx::PgPool;
use tracing::{info, instrument, warn};

use community_plant_core::{Administrator, Credential, Email, NewAdministrator, UserType};

use crate::db::{AdministratorRepository, RepositoryError};

/// Minimum password length for newly set credentials.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles administrator login and credential management.
pub struct AuthService<'a> {
    administrators: AdministratorRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            administrators: AdministratorRepository::new(pool),
        }
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or the
    /// password does not match.
    /// Returns `AuthError::Repository` if the lookup fails.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<Administrator, AuthError> {
        let email = Email::parse(email)?;
        let admin = self.administrators.get_by_email(&email).await?;

        let admin = check_credential(admin, password)?;
        info!(administrator_id = %admin.id, "Administrator logged in");
        Ok(admin)
    }

    /// Derive and store a new credential for the administrator with `email`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::AdministratorNotFound` if no record has this email.
    #[instrument(skip_all)]
    pub async fn set_credential(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let admin = self
            .administrators
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::AdministratorNotFound)?;

        self.administrators
            .update_credential(admin.id, &Credential::derive(password))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::AdministratorNotFound,
                other => AuthError::Repository(other),
            })?;

        info!(administrator_id = %admin.id, "Administrator credential updated");
        Ok(())
    }

    /// Create an administrator with a derived credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::AlreadyExists` if the email is already registered.
    #[instrument(skip_all)]
    pub async fn create_administrator(
        &self,
        email: &str,
        password: &str,
        role: UserType,
    ) -> Result<Administrator, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let admin = self
            .administrators
            .create(&NewAdministrator::new(email, password, role))
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::AlreadyExists,
                other => AuthError::Repository(other),
            })?;

        info!(administrator_id = %admin.id, "Administrator created");
        Ok(admin)
    }
}

/// Verify `password` against a looked-up record.
///
/// An unknown email and a wrong password produce the same error.
fn check_credential(
    admin: Option<Administrator>,
    password: &str,
) -> Result<Administrator, AuthError> {
    let admin = admin.ok_or(AuthError::InvalidCredentials)?;

    if !admin.has_derived_credential() {
        warn!(
            administrator_id = %admin.id,
            "Login attempt against an administrator without a derived credential"
        );
    }

    if admin.verify_credential(password) {
        Ok(admin)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use community_plant_core::AdministratorId;

    use super::*;

    fn admin_with(credential: Credential) -> Administrator {
        Administrator {
            id: AdministratorId::new(1),
            email: Email::parse("adm@adm.com").unwrap(),
            credential,
            role: UserType::Administrator,
        }
    }

    #[test]
    fn test_check_credential_accepts_matching_password() {
        let admin = admin_with(Credential::derive("hunter2"));
        let result = check_credential(Some(admin), "hunter2").unwrap();
        assert_eq!(result.id, AdministratorId::new(1));
    }

    #[test]
    fn test_check_credential_rejects_wrong_password() {
        let admin = admin_with(Credential::derive("hunter2"));
        assert!(matches!(
            check_credential(Some(admin), "hunter3"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_check_credential_unknown_email_is_indistinguishable() {
        assert!(matches!(
            check_credential(None, "hunter2"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_seed_placeholder_never_authenticates() {
        let admin = admin_with(Credential::from_stored("123"));
        assert!(matches!(
            check_credential(Some(admin.clone()), "123"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(check_credential(Some(admin), "").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("long-enough").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("").is_err());
    }
}
