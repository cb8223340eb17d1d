//! Garden member records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, GardenId, UserId, UserType};

/// A garden member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    /// Garden the member is attached to, if any.
    pub garden_id: Option<GardenId>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

/// User transfer shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub garden_id: Option<GardenId>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub garden_id: Option<GardenId>,
    pub user_type: UserType,
}
