//! Route definitions for landing sections (public + admin).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::landing_sections;
use crate::state::AppState;

/// Public routes mounted at `/landing-sections`.
///
/// ```text
/// GET / -> list_public (visible sections only)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(landing_sections::list_public))
}

/// Admin routes mounted at `/admin/landing-sections`. Sections are a
/// fixed seeded set: no create, no delete.
///
/// ```text
/// GET   /                           -> list_admin
/// PATCH /reorder                    -> reorder
/// GET   /{section_key}              -> get_by_key
/// PUT   /{section_key}              -> update
/// PATCH /{section_key}/visibility   -> set_visibility
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_sections::list_admin))
        .route("/reorder", patch(landing_sections::reorder))
        .route(
            "/{section_key}",
            get(landing_sections::get_by_key).put(landing_sections::update),
        )
        .route(
            "/{section_key}/visibility",
            patch(landing_sections::set_visibility),
        )
}
