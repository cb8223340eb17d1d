//! Core types for Community Plant.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod email;
pub mod id;
pub mod status;

pub use credential::{Credential, DIGEST_HEX_LEN};
pub use email::{Email, EmailError};
pub use id::*;
pub use status::{TaskStatus, UserType};
