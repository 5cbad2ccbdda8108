//! Academy case study entity model and DTOs.
//!
//! Academy projects are student/institution research collaborations. They
//! share the ordered-collection shape but are displayed partitioned by
//! `year` (descending) before `sort_order`.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `academy_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AcademyProject {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub tech_stack: serde_json::Value,
    pub abstract_text: String,
    pub methodology: String,
    pub results: String,
    pub image: Option<String>,
    pub wiring_diagram: Option<String>,
    pub gallery: serde_json::Value,
    /// Academic year facet; public lists are partitioned by this.
    pub year: i32,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new academy project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAcademyProject {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub tech_stack: Option<serde_json::Value>,
    pub abstract_text: Option<String>,
    pub methodology: Option<String>,
    pub results: Option<String>,
    pub image: Option<String>,
    pub wiring_diagram: Option<String>,
    pub gallery: Option<serde_json::Value>,
    pub year: i32,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// DTO for updating an existing academy project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAcademyProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<serde_json::Value>,
    pub abstract_text: Option<String>,
    pub methodology: Option<String>,
    pub results: Option<String>,
    pub image: Option<String>,
    pub wiring_diagram: Option<String>,
    pub gallery: Option<serde_json::Value>,
    pub year: Option<i32>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
