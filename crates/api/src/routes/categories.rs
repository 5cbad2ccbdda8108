//! Route definitions for categories (public + admin).

use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Public routes mounted at `/categories`.
///
/// ```text
/// GET / -> list (no publish gate; same set as admin)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(categories::list))
}

/// Admin routes mounted at `/admin/categories`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// PATCH  /reorder   -> reorder
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_admin).post(categories::create))
        .route("/reorder", patch(categories::reorder))
        .route(
            "/{id}",
            put(categories::update).delete(categories::delete),
        )
}
