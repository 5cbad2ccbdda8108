//! Route definitions for projects (public + admin).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET /        -> list_public
/// GET /{slug}  -> get_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_public))
        .route("/{slug}", get(projects::get_by_slug))
}

/// Admin routes mounted at `/admin/projects`.
///
/// `reorder` is registered before `/{id}` so the literal segment wins.
///
/// ```text
/// GET    /               -> list_admin
/// POST   /               -> create
/// PATCH  /reorder        -> reorder
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// PATCH  /{id}/publish   -> set_published
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_admin).post(projects::create))
        .route("/reorder", patch(projects::reorder))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}/publish", patch(projects::set_published))
}
