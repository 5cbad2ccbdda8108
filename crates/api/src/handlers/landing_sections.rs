//! Handlers for the `/landing-sections` resource (public read) and
//! `/admin/landing-sections` (authenticated edit, visibility, reorder).
//!
//! Sections are a fixed, migration-seeded set addressed by `section_key`;
//! there are no create or delete endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rynvlabs_core::error::CoreError;
use rynvlabs_core::ordering::{validate_reorder, ReorderItem};
use rynvlabs_db::models::landing_section::UpdateLandingSection;
use rynvlabs_db::repositories::LandingSectionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// Request body for `PATCH /admin/landing-sections/{section_key}/visibility`.
///
/// An omitted `is_visible` inverts the stored flag (the "eye icon"
/// control sends an empty body).
#[derive(Debug, Default, Deserialize)]
pub struct VisibilityRequest {
    pub is_visible: Option<bool>,
}

/// Request body for `PATCH /admin/landing-sections/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/landing-sections
///
/// Visible sections only, in display order.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = LandingSectionRepo::list_visible(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/landing-sections
///
/// Every section regardless of visibility, in display order.
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let sections = LandingSectionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// GET /api/v1/admin/landing-sections/{section_key}
pub async fn get_by_key(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(section_key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let section = LandingSectionRepo::find_by_key(&state.pool, &section_key)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "LandingSection",
                key: section_key,
            })
        })?;
    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/admin/landing-sections/{section_key}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(section_key): Path<String>,
    Json(input): Json<UpdateLandingSection>,
) -> AppResult<impl IntoResponse> {
    let section = LandingSectionRepo::update_by_key(&state.pool, &section_key, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "LandingSection",
                key: section_key,
            })
        })?;
    Ok(Json(DataResponse { data: section }))
}

/// PATCH /api/v1/admin/landing-sections/{section_key}/visibility
///
/// Set `is_visible` explicitly, or invert it when the body omits the
/// flag. Takes effect immediately for subsequent public reads.
pub async fn set_visibility(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(section_key): Path<String>,
    Json(input): Json<VisibilityRequest>,
) -> AppResult<impl IntoResponse> {
    let section =
        LandingSectionRepo::set_visibility_by_key(&state.pool, &section_key, input.is_visible)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundKey {
                    entity: "LandingSection",
                    key: section_key,
                })
            })?;
    Ok(Json(DataResponse { data: section }))
}

/// PATCH /api/v1/admin/landing-sections/reorder
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.items)?;
    LandingSectionRepo::reorder(&state.pool, &input.items).await?;
    Ok(Json(DataResponse {
        data: SuccessResponse::ok(),
    }))
}
