//! Handlers for the `/tech-stacks` resource (public read) and
//! `/admin/tech-stacks` (authenticated CRUD, reorder).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rynvlabs_core::error::CoreError;
use rynvlabs_core::ordering::{validate_reorder, ReorderItem};
use rynvlabs_core::slug::validate_title;
use rynvlabs_core::types::DbId;
use rynvlabs_db::models::tech_stack::{CreateTechStack, UpdateTechStack};
use rynvlabs_db::repositories::TechStackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// Request body for `PATCH /admin/tech-stacks/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/tech-stacks
///
/// All tech stack badges in display order. No publish gate.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tech_stacks = TechStackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tech_stacks }))
}

/// GET /api/v1/admin/tech-stacks
///
/// Same set as the public view, behind the admin auth boundary.
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let tech_stacks = TechStackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tech_stacks }))
}

/// POST /api/v1/admin/tech-stacks
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<CreateTechStack>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.name)?;

    let tech_stack = TechStackRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tech_stack })))
}

/// PUT /api/v1/admin/tech-stacks/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTechStack>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_title(name)?;
    }

    let tech_stack = TechStackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TechStack",
            id,
        }))?;
    Ok(Json(DataResponse { data: tech_stack }))
}

/// DELETE /api/v1/admin/tech-stacks/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TechStackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TechStack",
            id,
        }))
    }
}

/// PATCH /api/v1/admin/tech-stacks/reorder
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.items)?;
    TechStackRepo::reorder(&state.pool, &input.items).await?;
    Ok(Json(DataResponse {
        data: SuccessResponse::ok(),
    }))
}
