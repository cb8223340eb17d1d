//! Administrator -> public view.
//!
//! One-way only: the public view has no credential, so it cannot be turned
//! back into an identity record.

use crate::models::{Administrator, AdministratorResponse};

impl From<&Administrator> for AdministratorResponse {
    fn from(admin: &Administrator) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
            role: admin.role,
        }
    }
}

impl From<Administrator> for AdministratorResponse {
    fn from(admin: Administrator) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            role: admin.role,
        }
    }
}
