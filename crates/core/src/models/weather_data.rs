//! Weather observations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{GardenId, WeatherDataId};

/// A weather observation taken at a garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherData {
    pub id: WeatherDataId,
    pub garden_id: GardenId,
    pub recorded_at: DateTime<Utc>,
    pub temperature_c: Decimal,
    pub humidity_pct: Option<Decimal>,
    pub precipitation_mm: Option<Decimal>,
    pub conditions: Option<String>,
}

/// Weather observation transfer shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDataResponse {
    pub id: WeatherDataId,
    pub garden_id: GardenId,
    pub recorded_at: DateTime<Utc>,
    pub temperature_c: Decimal,
    pub humidity_pct: Option<Decimal>,
    pub precipitation_mm: Option<Decimal>,
    pub conditions: Option<String>,
}

/// Fields accepted when recording or correcting an observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWeatherData {
    pub garden_id: GardenId,
    pub recorded_at: DateTime<Utc>,
    pub temperature_c: Decimal,
    #[serde(default)]
    pub humidity_pct: Option<Decimal>,
    #[serde(default)]
    pub precipitation_mm: Option<Decimal>,
    #[serde(default)]
    pub conditions: Option<String>,
}
