//! Landing page section model and DTOs.
//!
//! The landing page is composed of a fixed set of sections (hero, services,
//! portfolio, ...) seeded by migration and addressed by their `section_key`
//! natural key. Sections are never created or deleted through the API; they
//! are edited, reordered, and shown/hidden via `is_visible`.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `landing_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LandingSection {
    pub id: DbId,
    /// Stable natural key (e.g. `hero`, `services`, `tech-ticker`).
    pub section_key: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Section-specific structured content; opaque to the ordering logic.
    pub content: serde_json::Value,
    pub is_visible: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a landing section. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLandingSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<serde_json::Value>,
    pub is_visible: Option<bool>,
}
