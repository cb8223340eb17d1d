//! Weather observation <-> transfer shape.

use crate::models::{WeatherData, WeatherDataResponse};

impl From<WeatherData> for WeatherDataResponse {
    fn from(value: WeatherData) -> Self {
        Self {
            id: value.id,
            garden_id: value.garden_id,
            recorded_at: value.recorded_at,
            temperature_c: value.temperature_c,
            humidity_pct: value.humidity_pct,
            precipitation_mm: value.precipitation_mm,
            conditions: value.conditions,
        }
    }
}

impl From<WeatherDataResponse> for WeatherData {
    fn from(value: WeatherDataResponse) -> Self {
        Self {
            id: value.id,
            garden_id: value.garden_id,
            recorded_at: value.recorded_at,
            temperature_c: value.temperature_c,
            humidity_pct: value.humidity_pct,
            precipitation_mm: value.precipitation_mm,
            conditions: value.conditions,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{GardenId, WeatherDataId};

    fn sample() -> WeatherData {
        WeatherData {
            id: WeatherDataId::new(900),
            garden_id: GardenId::new(3),
            recorded_at: Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap(),
            temperature_c: Decimal::new(-25, 1),
            humidity_pct: Some(Decimal::new(81, 0)),
            precipitation_mm: None,
            conditions: Some("overcast".to_string()),
        }
    }

    #[test]
    fn test_weather_to_response_copies_fields() {
        let response = WeatherDataResponse::from(sample());

        assert_eq!(response.id, WeatherDataId::new(900));
        assert_eq!(response.garden_id, GardenId::new(3));
        assert_eq!(response.temperature_c, Decimal::new(-25, 1));
        assert_eq!(response.humidity_pct, Some(Decimal::new(81, 0)));
        assert_eq!(response.precipitation_mm, None);
        assert_eq!(response.conditions.as_deref(), Some("overcast"));
    }

    #[test]
    fn test_response_to_weather_is_lossless() {
        assert_eq!(WeatherData::from(WeatherDataResponse::from(sample())), sample());
    }

    #[test]
    fn test_negative_temperature_serializes_as_string() {
        let json = serde_json::to_value(WeatherDataResponse::from(sample())).unwrap();
        assert_eq!(json["temperature_c"], "-2.5");
    }
}
