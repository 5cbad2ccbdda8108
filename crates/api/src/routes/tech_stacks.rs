//! Route definitions for tech stack badges (public + admin).

use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::tech_stacks;
use crate::state::AppState;

/// Public routes mounted at `/tech-stacks`.
///
/// ```text
/// GET / -> list (no publish gate; same set as admin)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(tech_stacks::list))
}

/// Admin routes mounted at `/admin/tech-stacks`.
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
        .route("/", get(tech_stacks::list_admin).post(tech_stacks::create))
        .route("/reorder", patch(tech_stacks::reorder))
        .route(
            "/{id}",
            put(tech_stacks::update).delete(tech_stacks::delete),
        )
}
