//! Content category model and DTOs.
//!
//! Categories are facet labels for other content (projects, products).
//! They carry a sort order but no publish gate: public and admin read the
//! same set.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// Uppercase discriminator for which content type this category applies
    /// to (e.g. `PROJECT`).
    pub category_type: String,
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub slug: Option<String>,
    pub category_type: String,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category_type: Option<String>,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
}
