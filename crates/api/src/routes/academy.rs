//! Route definitions for academy case studies (public + admin).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::academy;
use crate::state::AppState;

/// Public routes mounted at `/academy`.
///
/// ```text
/// GET /        -> list_public (carries distinct published years)
/// GET /{slug}  -> get_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(academy::list_public))
        .route("/{slug}", get(academy::get_by_slug))
}

/// Admin routes mounted at `/admin/academy`.
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
        .route("/", get(academy::list_admin).post(academy::create))
        .route("/reorder", patch(academy::reorder))
        .route(
            "/{id}",
            get(academy::get_by_id)
                .put(academy::update)
                .delete(academy::delete),
        )
        .route("/{id}/publish", patch(academy::set_published))
}
