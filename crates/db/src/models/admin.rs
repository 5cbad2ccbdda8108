//! Administrator account model and DTOs.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `admins` table.
///
/// `password_hash` is an Argon2id PHC string; it is deliberately excluded
/// from serialization so an admin row can be returned from profile
/// endpoints as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an admin account (startup bootstrap and tests).
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
