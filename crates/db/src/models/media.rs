//! Uploaded media file model and DTOs.

use rynvlabs_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `media` table.
///
/// One row per uploaded file. The file itself lives on disk under the
/// configured upload directory; `path` is the public URL path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    /// Stored filename on disk (unique per upload).
    pub filename: String,
    /// Filename as submitted by the client.
    pub original_name: String,
    pub mime_type: String,
    /// File size in bytes.
    pub size: i64,
    /// Public URL path (e.g. `/uploads/<filename>`).
    pub path: String,
    pub created_at: Timestamp,
}

/// DTO for registering an uploaded file.
#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
}
