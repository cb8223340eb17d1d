//! Stored credential representation.
//!
//! A [`Credential`] holds the text persisted in an identity record's
//! credential column. Once produced by [`Credential::derive`] it is the
//! SHA-256 digest of the plaintext secret rendered as 64 lowercase hex
//! characters; the plaintext itself is never kept.
//!
//! Values read back from the store (or from seed data) are wrapped with
//! [`Credential::from_stored`] without validation. A stored value that is
//! not a digest, such as the bootstrap placeholder `"123"`, simply never
//! matches any plaintext.

use core::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Length of a derived credential in hex characters (256-bit digest).
pub const DIGEST_HEX_LEN: usize = 64;

/// Credential text stored on an identity record.
///
/// ```
/// use community_plant_core::Credential;
///
/// let credential = Credential::derive("hunter2");
/// assert!(credential.matches("hunter2"));
/// assert!(!credential.matches("hunter3"));
/// assert_eq!(credential.as_str().len(), 64);
///
/// let placeholder = Credential::from_stored("123");
/// assert!(!placeholder.matches("123"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Derive the storable representation of `plaintext`.
    ///
    /// Deterministic and total: any string, including the empty string,
    /// produces a 64-character lowercase hex digest.
    #[must_use]
    pub fn derive(plaintext: &str) -> Self {
        Self(hex::encode(Sha256::digest(plaintext.as_bytes())))
    }

    /// Wrap a value read from the store as-is.
    #[must_use]
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether `plaintext` derives to exactly this stored value.
    #[must_use]
    pub fn matches(&self, plaintext: &str) -> bool {
        Self::derive(plaintext).0 == self.0
    }

    /// Whether the stored value has the shape of a derived digest.
    #[must_use]
    pub fn is_digest(&self) -> bool {
        self.0.len() == DIGEST_HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// The stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the stored text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Keep stored credentials out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Credential {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Credential {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Credential {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
