//! Product entity model and DTOs.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    /// JSON array of `{icon, title, desc}` feature entries.
    pub features: serde_json::Value,
    /// Plain-text spec sheet.
    pub specs: String,
    /// JSON array of `{label, value}` stat entries.
    pub stats: serde_json::Value,
    pub background: String,
    pub solution: String,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    pub slug: Option<String>,
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub features: Option<serde_json::Value>,
    pub specs: Option<String>,
    pub stats: Option<serde_json::Value>,
    pub background: Option<String>,
    pub solution: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// DTO for updating an existing product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub features: Option<serde_json::Value>,
    pub specs: Option<String>,
    pub stats: Option<serde_json::Value>,
    pub background: Option<String>,
    pub solution: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
