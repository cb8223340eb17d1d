//! User <-> transfer shape.

use crate::models::{User, UserResponse};

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            garden_id: value.garden_id,
            user_type: value.user_type,
            created_at: value.created_at,
        }
    }
}

impl From<UserResponse> for User {
    fn from(value: UserResponse) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            garden_id: value.garden_id,
            user_type: value.user_type,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::{Email, GardenId, UserId, UserType};

    fn sample() -> User {
        User {
            id: UserId::new(11),
            name: "Rosa Campos".to_string(),
            email: Email::parse("rosa@plots.org").unwrap(),
            phone: None,
            garden_id: Some(GardenId::new(3)),
            user_type: UserType::Gardener,
            created_at: Utc.with_ymd_and_hms(2024, 4, 2, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_user_to_response_copies_fields() {
        let response = UserResponse::from(sample());

        assert_eq!(response.id, UserId::new(11));
        assert_eq!(response.name, "Rosa Campos");
        assert_eq!(response.email.as_str(), "rosa@plots.org");
        assert_eq!(response.phone, None);
        assert_eq!(response.garden_id, Some(GardenId::new(3)));
        assert_eq!(response.user_type, UserType::Gardener);
    }

    #[test]
    fn test_response_to_user_is_lossless() {
        assert_eq!(User::from(UserResponse::from(sample())), sample());
    }
}
