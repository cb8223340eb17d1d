//! Closed enums shared by entities and transfer shapes.

use serde::{Deserialize, Serialize};

/// Kind of account a record belongs to.
///
/// The set is closed but may grow; match on it exhaustively so new
/// variants surface at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Manages the system and its records.
    Administrator,
    /// Tends one or more plots.
    Gardener,
    /// Helps with tasks without owning a plot.
    Volunteer,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Administrator => write!(f, "administrator"),
            Self::Gardener => write!(f, "gardener"),
            Self::Volunteer => write!(f, "volunteer"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Self::Administrator),
            "gardener" => Ok(Self::Gardener),
            "volunteer" => Ok(Self::Volunteer),
            _ => Err(format!("invalid user type: {s}")),
        }
    }
}

/// Progress of a garden task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "task_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}
