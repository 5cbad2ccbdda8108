//! Portfolio project entity model and DTOs.
//!
//! Projects are the main public showcase: each row carries a rich content
//! payload (tech stack, gallery, stats as JSONB) that is opaque to the
//! ordering logic, plus the shared ordered-collection fields
//! (`sort_order`, `is_published`).

use rynvlabs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Uppercase category facet (e.g. `SOFTWARE`, `IOT`, `AUTOMATION`).
    pub category: String,
    pub image: Option<String>,
    /// JSON array of tech stack names.
    pub tech_stack: serde_json::Value,
    pub challenge: String,
    pub solution: String,
    pub deep_dive: String,
    /// JSON array of image paths.
    pub gallery: serde_json::Value,
    /// JSON array of `{label, value}` stat entries.
    pub stats: serde_json::Value,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// `slug` defaults to a slugified title; `sort_order` defaults to
/// append-to-end; `is_published` defaults to false.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    pub tech_stack: Option<serde_json::Value>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub deep_dive: Option<String>,
    pub gallery: Option<serde_json::Value>,
    pub stats: Option<serde_json::Value>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// DTO for updating an existing project. Only non-`None` fields are applied.
///
/// The slug is recomputed from `title` only when the title changes and no
/// explicit `slug` is supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub tech_stack: Option<serde_json::Value>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub deep_dive: Option<String>,
    pub gallery: Option<serde_json::Value>,
    pub stats: Option<serde_json::Value>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
