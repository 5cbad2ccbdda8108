//! Handlers for the `/products` resource (public) and `/admin/products`
//! (authenticated CRUD, reorder, publish toggle).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rynvlabs_core::error::CoreError;
use rynvlabs_core::ordering::{validate_reorder, ReorderItem};
use rynvlabs_core::slug::{validate_slug, validate_title};
use rynvlabs_core::types::DbId;
use rynvlabs_db::models::product::{CreateProduct, UpdateProduct};
use rynvlabs_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// Request body for `PATCH /admin/products/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// Request body for `PATCH /admin/products/{id}/publish`.
#[derive(Debug, Default, Deserialize)]
pub struct PublishRequest {
    pub is_published: Option<bool>,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/products
///
/// Published products in display order. The catalog is small; no
/// pagination on the public surface.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_public(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "Product",
                key: slug,
            })
        })?;
    Ok(Json(DataResponse { data: product }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/products
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_admin(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/admin/products
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// GET /api/v1/admin/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(DataResponse { data: product }))
}

/// PUT /api/v1/admin/products/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/v1/admin/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}

/// PATCH /api/v1/admin/products/reorder
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.items)?;
    ProductRepo::reorder(&state.pool, &input.items).await?;
    Ok(Json(DataResponse {
        data: SuccessResponse::ok(),
    }))
}

/// PATCH /api/v1/admin/products/{id}/publish
pub async fn set_published(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<PublishRequest>,
) -> AppResult<impl IntoResponse> {
    let updated = ProductRepo::set_published(&state.pool, id, input.is_published).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .expect("just updated");
    Ok(Json(DataResponse { data: product }))
}
