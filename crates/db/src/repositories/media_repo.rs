//! Repository for the `media` table.

use sqlx::PgPool;

use rynvlabs_core::types::DbId;

use crate::models::media::{CreateMedia, Media};

/// Column list for the `media` table.
const COLUMNS: &str = "id, filename, original_name, mime_type, size, path, created_at";

/// Mime-type facet for media listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image/*` mime types.
    Image,
    /// Everything that is not an image.
    Document,
}

/// Provides registration, listing, and deletion of uploaded media rows.
///
/// The file bytes themselves live on disk; callers own file I/O.
pub struct MediaRepo;

impl MediaRepo {
    /// Register an uploaded file.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (filename, original_name, mime_type, size, path) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.filename)
            .bind(&input.original_name)
            .bind(&input.mime_type)
            .bind(input.size)
            .bind(&input.path)
            .fetch_one(pool)
            .await
    }

    /// Find a media row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media newest-first with pagination and an optional mime facet.
    ///
    /// Returns the page slice plus the pre-pagination match count.
    pub async fn list(
        pool: &PgPool,
        kind: Option<MediaKind>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Media>, i64), sqlx::Error> {
        let where_clause = match kind {
            Some(MediaKind::Image) => "WHERE mime_type LIKE 'image/%'",
            Some(MediaKind::Document) => "WHERE mime_type NOT LIKE 'image/%'",
            None => "",
        };

        let list_query = format!(
            "SELECT {COLUMNS} FROM media {where_clause} \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let data = sqlx::query_as::<_, Media>(&list_query)
            .bind(limit)
            .bind(rynvlabs_core::paging::page_offset(page, limit))
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM media {where_clause}");
        let total: i64 = sqlx::query_scalar(&count_query).fetch_one(pool).await?;

        Ok((data, total))
    }

    /// Delete a media row by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
