//! Handlers for the `/site-settings` resource.
//!
//! The public read collapses all rows into one `{key: value}` object; the
//! admin surface reads raw rows and writes via atomic upsert
//! (last-write-wins on the key, never a conflict).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use rynvlabs_core::error::CoreError;
use rynvlabs_db::repositories::SiteSettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/site-settings
///
/// All settings collapsed into a single `{key: value}` object.
pub async fn get_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingRepo::list(&state.pool).await?;

    let mut object = serde_json::Map::new();
    for setting in settings {
        object.insert(setting.key, setting.value);
    }

    Ok(Json(DataResponse {
        data: Value::Object(object),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/site-settings
///
/// Raw setting rows ordered by key.
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// GET /api/v1/admin/site-settings/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let setting = SiteSettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "SiteSetting",
                key,
            })
        })?;
    Ok(Json(DataResponse { data: setting }))
}

/// PUT /api/v1/admin/site-settings/{key}
///
/// Create or replace the setting in one atomic statement. The body is the
/// raw JSON value to store.
pub async fn upsert(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let setting = SiteSettingRepo::upsert(&state.pool, &key, &value).await?;
    Ok(Json(DataResponse { data: setting }))
}
