//! Versioned seed data.
//!
//! Seed documents live in `crates/server/seeds/` and are compiled into the
//! binary. Each document carries a version; applied versions are recorded in
//! `seed_history` so a document is inserted at most once, in the same
//! transaction as its rows.
//!
//! ## YAML Format
//!
//! ```yaml
//! version: 1
//! name: bootstrap_administrator
//! administrators:
//!   - id: 1
//!     email: adm@adm.com
//!     credential: "123"
//!     role: administrator
//!     bootstrap: true
//! ```
//!
//! `credential` is stored verbatim. An administrator marked `bootstrap: true`
//! receives the derived digest of `BOOTSTRAP_ADMIN_PASSWORD` instead, when
//! that variable is set.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, instrument, warn};

use community_plant_core::{Credential, Email, UserType};

use crate::config::SeedConfig;

/// Seed documents shipped with the server, in any order.
const SEED_SOURCES: &[(&str, &str)] = &[(
    "0001_bootstrap_administrator.yaml",
    include_str!("../../seeds/0001_bootstrap_administrator.yaml"),
)];

/// Errors raised while loading or applying seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A seed document failed to parse.
    #[error("invalid seed document {file}: {message}")]
    Invalid { file: String, message: String },

    /// Two documents share a version number.
    #[error("duplicate seed version {0}")]
    DuplicateVersion(i32),

    /// Database error while applying a document.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One versioned seed document.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDocument {
    /// Monotonic version; documents apply in ascending order.
    pub version: i32,
    /// Human-readable name recorded in `seed_history`.
    pub name: String,
    /// Identity records to insert.
    #[serde(default)]
    pub administrators: Vec<SeedAdministrator>,
}

/// An identity record as written in a seed document.
#[derive(Clone, Deserialize)]
pub struct SeedAdministrator {
    pub id: i32,
    pub email: Email,
    /// Stored verbatim unless overridden for the bootstrap account.
    pub credential: String,
    pub role: UserType,
    /// Replace `credential` with the configured bootstrap password digest.
    #[serde(default)]
    pub bootstrap: bool,
}

impl std::fmt::Debug for SeedAdministrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdministrator")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("credential", &"[REDACTED]")
            .field("role", &self.role)
            .field("bootstrap", &self.bootstrap)
            .finish()
    }
}

impl SeedAdministrator {
    /// The credential to store for this record.
    #[must_use]
    pub fn resolve_credential(&self, bootstrap_password: Option<&SecretString>) -> Credential {
        match bootstrap_password {
            Some(password) if self.bootstrap => Credential::derive(password.expose_secret()),
            _ => Credential::from_stored(self.credential.clone()),
        }
    }
}

/// Outcome of applying seed documents.
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Versions inserted by this run.
    pub applied: Vec<i32>,
    /// Versions already present in `seed_history`.
    pub skipped: Vec<i32>,
}

/// Parse the embedded seed documents, sorted by version.
///
/// # Errors
///
/// Returns `SeedError::Invalid` if a document does not parse and
/// `SeedError::DuplicateVersion` if two documents share a version.
pub fn load_documents() -> Result<Vec<SeedDocument>, SeedError> {
    parse_documents(SEED_SOURCES)
}

fn parse_documents(sources: &[(&str, &str)]) -> Result<Vec<SeedDocument>, SeedError> {
    let mut documents = sources
        .iter()
        .map(|(file, content)| {
            serde_yaml::from_str::<SeedDocument>(content).map_err(|e| SeedError::Invalid {
                file: (*file).to_string(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    documents.sort_by_key(|doc| doc.version);
    if let Some((doc, _)) = documents
        .iter()
        .zip(documents.iter().skip(1))
        .find(|(a, b)| a.version == b.version)
    {
        return Err(SeedError::DuplicateVersion(doc.version));
    }

    Ok(documents)
}

/// Apply every embedded seed document not yet recorded in `seed_history`.
///
/// # Errors
///
/// Returns `SeedError` if a document is invalid or a database operation fails.
/// A failing document is rolled back; earlier documents stay applied.
#[instrument(skip_all)]
pub async fn apply(pool: &PgPool, config: &SeedConfig) -> Result<SeedReport, SeedError> {
    let documents = load_documents()?;
    let mut report = SeedReport::default();

    for document in &documents {
        if apply_document(pool, document, config).await? {
            info!(version = document.version, name = %document.name, "Applied seed document");
            report.applied.push(document.version);
        } else {
            report.skipped.push(document.version);
        }
    }

    Ok(report)
}

async fn apply_document(
    pool: &PgPool,
    document: &SeedDocument,
    config: &SeedConfig,
) -> Result<bool, SeedError> {
    let mut tx = pool.begin().await?;

    // Concurrent loaders block on the primary key here; the loser sees no row.
    let claimed = sqlx::query_scalar::<_, i32>(
        "INSERT INTO seed_history (version, name) VALUES ($1, $2)
         ON CONFLICT (version) DO NOTHING
         RETURNING version",
    )
    .bind(document.version)
    .bind(&document.name)
    .fetch_optional(&mut *tx)
    .await?;

    if claimed.is_none() {
        tx.rollback().await?;
        return Ok(false);
    }

    let bootstrap_password = config.bootstrap_admin_password.as_ref();
    for admin in &document.administrators {
        let credential = admin.resolve_credential(bootstrap_password);
        if !credential.is_digest() {
            warn!(
                administrator_id = admin.id,
                "Seeding administrator with a non-digest credential; it cannot log in until a password is set"
            );
        }

        sqlx::query(
            "INSERT INTO administrators (id, email, credential, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(admin.id)
        .bind(&admin.email)
        .bind(&credential)
        .bind(admin.role)
        .execute(&mut *tx)
        .await?;
    }

    if !document.administrators.is_empty() {
        // Explicit ids bypass the sequence; move it past them.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('administrators', 'id'),
                           (SELECT COALESCE(MAX(id), 1) FROM administrators))",
        )
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_documents_parse() {
        let documents = load_documents().unwrap();
        assert!(!documents.is_empty());
        assert!(documents.windows(2).all(|w| w[0].version < w[1].version));
    }

    #[test]
    fn test_bootstrap_document_matches_contract() {
        let documents = load_documents().unwrap();
        let bootstrap = documents.iter().find(|d| d.version == 1).unwrap();

        assert_eq!(bootstrap.name, "bootstrap_administrator");
        assert_eq!(bootstrap.administrators.len(), 1);

        let admin = &bootstrap.administrators[0];
        assert_eq!(admin.id, 1);
        assert_eq!(admin.email.as_str(), "adm@adm.com");
        assert_eq!(admin.role, UserType::Administrator);
        assert_eq!(admin.credential, "123");
        assert!(admin.bootstrap);
    }

    #[test]
    fn test_placeholder_kept_without_bootstrap_password() {
        let documents = load_documents().unwrap();
        let admin = &documents[0].administrators[0];

        let credential = admin.resolve_credential(None);

        assert_eq!(credential.as_str(), "123");
        assert!(!credential.matches("123"));
    }

    #[test]
    fn test_bootstrap_password_is_derived() {
        let documents = load_documents().unwrap();
        let admin = &documents[0].administrators[0];
        let password = SecretString::from("Tomato-Vine-42-Basil");

        let credential = admin.resolve_credential(Some(&password));

        assert!(credential.is_digest());
        assert!(credential.matches("Tomato-Vine-42-Basil"));
        assert_ne!(credential.as_str(), "123");
    }

    #[test]
    fn test_bootstrap_password_ignored_for_regular_records() {
        let admin = SeedAdministrator {
            id: 2,
            email: Email::parse("ops@garden.org").unwrap(),
            credential: Credential::derive("already-hashed").into_inner(),
            role: UserType::Administrator,
            bootstrap: false,
        };
        let password = SecretString::from("Tomato-Vine-42-Basil");

        let credential = admin.resolve_credential(Some(&password));

        assert!(credential.matches("already-hashed"));
    }

    #[test]
    fn test_documents_sorted_by_version() {
        let sources = [
            ("b.yaml", "version: 2\nname: second\n"),
            ("a.yaml", "version: 1\nname: first\n"),
        ];

        let documents = parse_documents(&sources).unwrap();

        assert_eq!(documents[0].name, "first");
        assert_eq!(documents[1].name, "second");
        assert!(documents[1].administrators.is_empty());
    }

    #[test]
    fn test_duplicate_versions_rejected() {
        let sources = [
            ("a.yaml", "version: 3\nname: one\n"),
            ("b.yaml", "version: 3\nname: two\n"),
        ];

        assert!(matches!(
            parse_documents(&sources),
            Err(SeedError::DuplicateVersion(3))
        ));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let sources = [(
            "bad.yaml",
            "version: 1\nname: bad\nadministrators:\n  - id: 1\n    email: nope\n    credential: x\n    role: administrator\n",
        )];

        assert!(matches!(
            parse_documents(&sources),
            Err(SeedError::Invalid { ref file, .. }) if file == "bad.yaml"
        ));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let documents = load_documents().unwrap();
        let debug = format!("{:?}", documents[0].administrators[0]);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("\"123\""));
    }
}
