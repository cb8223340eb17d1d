//! Administrator identity record.

use serde::{Deserialize, Serialize};

use crate::types::{AdministratorId, Credential, Email, UserType};

/// An administrator account (identity record).
///
/// The `credential` field holds a [`Credential`]. After
/// [`derive_credential`](Self::derive_credential) it is a one-way digest and
/// the plaintext cannot be recovered from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    /// Store-assigned identifier; immutable once created.
    pub id: AdministratorId,
    /// Login address. Uniqueness is enforced by the store.
    pub email: Email,
    /// Stored credential text.
    pub credential: Credential,
    /// Role tag.
    pub role: UserType,
}

impl Administrator {
    /// Build a record from a plaintext secret, deriving its credential.
    #[must_use]
    pub fn new(id: AdministratorId, email: Email, plaintext: &str, role: UserType) -> Self {
        Self {
            id,
            email,
            credential: Credential::derive(plaintext),
            role,
        }
    }

    /// Overwrite the stored credential with the digest of `plaintext`.
    pub fn derive_credential(&mut self, plaintext: &str) {
        self.credential = Credential::derive(plaintext);
    }

    /// Check `plaintext` against the stored credential.
    ///
    /// Returns `false` for any mismatch, including a stored value that was
    /// never derived (an empty string or a seed placeholder).
    #[must_use]
    pub fn verify_credential(&self, plaintext: &str) -> bool {
        self.credential.matches(plaintext)
    }

    /// Whether the stored credential looks like a derived digest.
    #[must_use]
    pub fn has_derived_credential(&self) -> bool {
        self.credential.is_digest()
    }
}

/// Input for creating an administrator; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdministrator {
    pub email: Email,
    pub credential: Credential,
    pub role: UserType,
}

impl NewAdministrator {
    /// Prepare a new administrator, deriving the credential from `plaintext`.
    #[must_use]
    pub fn new(email: Email, plaintext: &str, role: UserType) -> Self {
        Self {
            email,
            credential: Credential::derive(plaintext),
            role,
        }
    }
}

/// Public view of an administrator.
///
/// Deliberately carries no credential field; the identity record is not part
/// of the bidirectional entity/transfer mapping set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministratorResponse {
    pub id: AdministratorId,
    pub email: Email,
    pub role: UserType,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seed_record() -> Administrator {
        Administrator {
            id: AdministratorId::new(1),
            email: Email::parse("adm@adm.com").unwrap(),
            credential: Credential::from_stored("123"),
            role: UserType::Administrator,
        }
    }

    #[test]
    fn test_hunter2_scenario() {
        let mut admin = seed_record();
        admin.derive_credential("hunter2");

        assert!(admin.verify_credential("hunter2"));
        assert!(!admin.verify_credential("hunter3"));
    }

    #[test]
    fn test_empty_secret_round_trips() {
        let mut admin = seed_record();
        admin.derive_credential("");

        assert!(admin.verify_credential(""));
        assert!(!admin.verify_credential(" "));
    }

    #[test]
    fn test_seed_placeholder_fails_verification() {
        let admin = seed_record();

        assert!(!admin.verify_credential("123"));
        assert!(!admin.verify_credential(""));
        assert!(!admin.has_derived_credential());
    }

    #[test]
    fn test_derive_overwrites_previous_value() {
        let mut admin = seed_record();
        admin.derive_credential("first");
        let first = admin.credential.clone();

        admin.derive_credential("second");

        assert_ne!(admin.credential, first);
        assert!(!admin.verify_credential("first"));
        assert!(admin.verify_credential("second"));
    }

    #[test]
    fn test_stored_credential_is_not_the_plaintext() {
        let mut admin = seed_record();
        admin.derive_credential("hunter2");

        assert_ne!(admin.credential.as_str(), "hunter2");
        assert!(!admin.credential.as_str().contains("hunter2"));
        assert!(admin.has_derived_credential());
    }

    #[test]
    fn test_new_derives_credential() {
        let admin = Administrator::new(
            AdministratorId::new(2),
            Email::parse("ops@garden.org").unwrap(),
            "s3cret-seedling",
            UserType::Administrator,
        );

        assert!(admin.verify_credential("s3cret-seedling"));
        assert_eq!(admin.credential, Credential::derive("s3cret-seedling"));
    }

    #[test]
    fn test_new_administrator_input_derives_credential() {
        let input = NewAdministrator::new(
            Email::parse("ops@garden.org").unwrap(),
            "s3cret-seedling",
            UserType::Administrator,
        );

        assert!(input.credential.matches("s3cret-seedling"));
    }
}
