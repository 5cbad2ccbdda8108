//! Handlers for the `/admin/media` resource: multipart upload, paged
//! listing with a mime facet, and deletion.
//!
//! Uploaded bytes land under the configured upload directory with a
//! UUID-prefixed filename; the row in `media` records the original name
//! and the public `/uploads/...` path. Files are served by the static
//! file layer, not by these handlers.

use std::path::Path as FsPath;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use rynvlabs_core::error::CoreError;
use rynvlabs_core::paging::{clamp_limit, clamp_page};
use rynvlabs_core::types::DbId;
use rynvlabs_db::models::media::CreateMedia;
use rynvlabs_db::repositories::media_repo::MediaKind;
use rynvlabs_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Query parameters for the media list (`?page=&limit=&type=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// `image` or `document`; anything else returns everything.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/media?page=&limit=&type=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let kind = match params.kind.as_deref() {
        Some("image") => Some(MediaKind::Image),
        Some("document") => Some(MediaKind::Document),
        _ => None,
    };

    let (data, total) = MediaRepo::list(&state.pool, kind, page, limit).await?;
    Ok(Json(PagedResponse {
        data,
        total,
        page,
        limit,
    }))
}

/// POST /api/v1/admin/media
///
/// Accept one or more files as multipart form data, write each under the
/// upload directory, and register a media row per file.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let mut uploaded = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let original_name = field.file_name().unwrap_or("unnamed").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        // Unique on-disk name: UUID plus the original extension.
        let extension = FsPath::new(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let filename = format!("{}{extension}", Uuid::new_v4());

        let dest = FsPath::new(&state.config.upload_dir).join(&filename);
        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        let media = MediaRepo::create(
            &state.pool,
            &CreateMedia {
                filename: filename.clone(),
                original_name,
                mime_type,
                size: data.len() as i64,
                path: format!("/uploads/{filename}"),
            },
        )
        .await?;

        uploaded.push(media);
    }

    if uploaded.is_empty() {
        return Err(AppError::BadRequest(
            "No files received in multipart upload".to_string(),
        ));
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: uploaded })))
}

/// DELETE /api/v1/admin/media/{id}
///
/// Remove the file from disk (best effort) and delete the row. The row
/// delete is authoritative; a missing file is logged and ignored.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Media", id }))?;

    let file_path = FsPath::new(&state.config.upload_dir).join(&media.filename);
    if let Err(e) = tokio::fs::remove_file(&file_path).await {
        tracing::warn!(path = %file_path.display(), error = %e, "Failed to delete media file");
    }

    MediaRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
