//! Garden records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GardenId;

/// A community garden site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    pub id: GardenId,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    /// Cultivated area in square metres.
    pub area_sq_m: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Garden transfer shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenResponse {
    pub id: GardenId,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub area_sq_m: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGarden {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area_sq_m: Option<Decimal>,
}
