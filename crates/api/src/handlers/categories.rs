//! Handlers for the `/categories` resource (public read) and
//! `/admin/categories` (authenticated CRUD, reorder).
//!
//! Categories have no publish gate: the public and admin list views read
//! the same ordered set.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rynvlabs_core::error::CoreError;
use rynvlabs_core::ordering::{validate_reorder, ReorderItem};
use rynvlabs_core::slug::{validate_slug, validate_title};
use rynvlabs_core::types::DbId;
use rynvlabs_db::models::category::{CreateCategory, UpdateCategory};
use rynvlabs_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// Query parameters for category lists (`?type=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// Request body for `PATCH /admin/categories/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/categories?type=
///
/// All categories in display order, optionally filtered by type. There is
/// no publish gate, so the public view is the full set.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool, params.category_type.as_deref()).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/admin/categories?type=
///
/// Same set as the public view, behind the admin auth boundary.
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool, params.category_type.as_deref()).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.name)?;
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_title(name)?;
    }
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}

/// PATCH /api/v1/admin/categories/reorder
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.items)?;
    CategoryRepo::reorder(&state.pool, &input.items).await?;
    Ok(Json(DataResponse {
        data: SuccessResponse::ok(),
    }))
}
