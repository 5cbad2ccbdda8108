//! Handlers for the `/academy` resource (public) and `/admin/academy`
//! (authenticated CRUD, reorder, publish toggle).
//!
//! Academy case studies order by year (newest first) before sort order,
//! and the public list response carries the distinct published years for
//! the filter UI.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use rynvlabs_core::error::CoreError;
use rynvlabs_core::ordering::{validate_reorder, ReorderItem};
use rynvlabs_core::paging::{clamp_limit, clamp_page};
use rynvlabs_core::slug::{validate_slug, validate_title};
use rynvlabs_core::types::DbId;
use rynvlabs_db::models::academy_project::{
    AcademyProject, CreateAcademyProject, UpdateAcademyProject,
};
use rynvlabs_db::repositories::ordered::{Facet, ListFilter};
use rynvlabs_db::repositories::AcademyProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the public academy list.
#[derive(Debug, Deserialize)]
pub struct PublicListParams {
    pub search: Option<String>,
    pub year: Option<i32>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the admin academy list (no pagination).
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub search: Option<String>,
    pub year: Option<i32>,
}

/// Paginated academy list response; extends the standard paged envelope
/// with the distinct published years (a whole-collection query, not
/// derived from the returned page).
#[derive(Debug, Serialize)]
pub struct AcademyListResponse {
    pub data: Vec<AcademyProject>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub years: Vec<i32>,
}

/// Request body for `PATCH /admin/academy/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// Request body for `PATCH /admin/academy/{id}/publish`.
#[derive(Debug, Default, Deserialize)]
pub struct PublishRequest {
    pub is_published: Option<bool>,
}

fn list_filter(search: Option<String>, year: Option<i32>) -> ListFilter {
    ListFilter {
        search,
        facet: year.map(|y| ("year", Facet::Year(y))),
    }
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/academy?search=&year=&page=&limit=
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<PublicListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let filter = list_filter(params.search, params.year);

    let (data, total) = AcademyProjectRepo::list_public(&state.pool, &filter, page, limit).await?;
    let years = AcademyProjectRepo::published_years(&state.pool).await?;

    Ok(Json(AcademyListResponse {
        data,
        total,
        page,
        limit,
        years,
    }))
}

/// GET /api/v1/academy/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = AcademyProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "AcademyProject",
                key: slug,
            })
        })?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/academy?search=&year=
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = list_filter(params.search, params.year);
    let projects = AcademyProjectRepo::list_admin(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/academy
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<CreateAcademyProject>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let project = AcademyProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/admin/academy/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = AcademyProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AcademyProject",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/admin/academy/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAcademyProject>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let project = AcademyProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AcademyProject",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/academy/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AcademyProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AcademyProject",
            id,
        }))
    }
}

/// PATCH /api/v1/admin/academy/reorder
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.items)?;
    AcademyProjectRepo::reorder(&state.pool, &input.items).await?;
    Ok(Json(DataResponse {
        data: SuccessResponse::ok(),
    }))
}

/// PATCH /api/v1/admin/academy/{id}/publish
pub async fn set_published(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<PublishRequest>,
) -> AppResult<impl IntoResponse> {
    let updated = AcademyProjectRepo::set_published(&state.pool, id, input.is_published).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AcademyProject",
            id,
        }));
    }
    let project = AcademyProjectRepo::find_by_id(&state.pool, id)
        .await?
        .expect("just updated");
    Ok(Json(DataResponse { data: project }))
}
