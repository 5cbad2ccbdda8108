//! Tech stack badge model and DTOs.
//!
//! Tech stack entries are small display badges (name, icon, brand color)
//! referenced by name from project/product payloads. Uniquely keyed on
//! `name`; ordered but not publish-gated.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tech_stacks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechStack {
    pub id: DbId,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tech stack entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTechStack {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing tech stack entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTechStack {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}
