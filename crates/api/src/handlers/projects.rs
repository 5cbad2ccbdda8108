//! Handlers for the `/projects` resource (public) and `/admin/projects`
//! (authenticated CRUD, reorder, publish toggle).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rynvlabs_core::error::CoreError;
use rynvlabs_core::ordering::{validate_reorder, ReorderItem};
use rynvlabs_core::paging::{clamp_limit, clamp_page};
use rynvlabs_core::slug::{validate_slug, validate_title};
use rynvlabs_core::types::DbId;
use rynvlabs_db::models::project::{CreateProject, UpdateProject};
use rynvlabs_db::repositories::ordered::{Facet, ListFilter};
use rynvlabs_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, PagedResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / request types
// ---------------------------------------------------------------------------

/// Query parameters for the public project list.
#[derive(Debug, Deserialize)]
pub struct PublicListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the admin project list (no pagination).
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Request body for `PATCH /admin/projects/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

/// Request body for `PATCH /admin/projects/{id}/publish`.
///
/// An omitted `is_published` inverts the stored flag.
#[derive(Debug, Default, Deserialize)]
pub struct PublishRequest {
    pub is_published: Option<bool>,
}

/// Build the shared list filter from search/category parameters. The
/// category facet is normalized to uppercase to match stored values.
fn list_filter(search: Option<String>, category: Option<String>) -> ListFilter {
    ListFilter {
        search,
        facet: category.map(|c| ("category", Facet::Text(c.to_uppercase()))),
    }
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects?search=&category=&page=&limit=
///
/// Published projects in display order, paginated.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<PublicListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let filter = list_filter(params.search, params.category);

    let (data, total) = ProjectRepo::list_public(&state.pool, &filter, page, limit).await?;
    Ok(Json(PagedResponse {
        data,
        total,
        page,
        limit,
    }))
}

/// GET /api/v1/projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "Project",
                key: slug,
            })
        })?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects?search=&category=
///
/// Every project regardless of publish state, in display order.
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = list_filter(params.search, params.category);
    let projects = ProjectRepo::list_admin(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref slug) = input.slug {
        validate_slug(slug)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// PATCH /api/v1/admin/projects/reorder
///
/// Atomically rewrite the display order for the listed projects. An id
/// that does not belong to the projects table fails the whole batch.
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.items)?;
    ProjectRepo::reorder(&state.pool, &input.items).await?;
    Ok(Json(DataResponse {
        data: SuccessResponse::ok(),
    }))
}

/// PATCH /api/v1/admin/projects/{id}/publish
///
/// Set `is_published` explicitly, or invert it when the body omits the
/// flag. Returns the updated project.
pub async fn set_published(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<PublishRequest>,
) -> AppResult<impl IntoResponse> {
    let updated = ProjectRepo::set_published(&state.pool, id, input.is_published).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .expect("just updated");
    Ok(Json(DataResponse { data: project }))
}
