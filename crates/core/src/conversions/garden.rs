//! Garden <-> transfer shape.

use crate::models::{Garden, GardenResponse};

impl From<Garden> for GardenResponse {
    fn from(value: Garden) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            description: value.description,
            area_sq_m: value.area_sq_m,
            created_at: value.created_at,
        }
    }
}

impl From<GardenResponse> for Garden {
    fn from(value: GardenResponse) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            description: value.description,
            area_sq_m: value.area_sq_m,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::GardenId;

    fn sample() -> Garden {
        Garden {
            id: GardenId::new(3),
            name: "Riverside Plots".to_string(),
            location: "12 Mill Lane".to_string(),
            description: Some("Raised beds by the river".to_string()),
            area_sq_m: Some(Decimal::new(4505, 1)),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_garden_to_response_copies_fields() {
        let response = GardenResponse::from(sample());

        assert_eq!(response.id, GardenId::new(3));
        assert_eq!(response.name, "Riverside Plots");
        assert_eq!(response.location, "12 Mill Lane");
        assert_eq!(response.description.as_deref(), Some("Raised beds by the river"));
        assert_eq!(response.area_sq_m, Some(Decimal::new(4505, 1)));
        assert_eq!(response.created_at, sample().created_at);
    }

    #[test]
    fn test_response_to_garden_is_lossless() {
        assert_eq!(Garden::from(GardenResponse::from(sample())), sample());
    }

    #[test]
    fn test_response_json_shape() {
        let json = serde_json::to_value(GardenResponse::from(sample())).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["area_sq_m"], "450.5");
        assert_eq!(json["created_at"], "2024-03-01T09:30:00Z");
    }
}
