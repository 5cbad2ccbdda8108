//! Route definitions for products (public + admin).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Public routes mounted at `/products`.
///
/// ```text
/// GET /        -> list_public
/// GET /{slug}  -> get_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list_public))
        .route("/{slug}", get(products::get_by_slug))
}

/// Admin routes mounted at `/admin/products`.
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
        .route("/", get(products::list_admin).post(products::create))
        .route("/reorder", patch(products::reorder))
        .route(
            "/{id}",
            get(products::get_by_id)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/{id}/publish", patch(products::set_published))
}
