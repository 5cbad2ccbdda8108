//! Route definitions for site settings (public + admin).

use axum::routing::get;
use axum::Router;

use crate::handlers::site_settings;
use crate::state::AppState;

/// Public routes mounted at `/site-settings`.
///
/// ```text
/// GET / -> get_public (collapsed {key: value} object)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(site_settings::get_public))
}

/// Admin routes mounted at `/admin/site-settings`.
///
/// ```text
/// GET /        -> list_admin (raw rows)
/// GET /{key}   -> get_by_key
/// PUT /{key}   -> upsert
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_settings::list_admin))
        .route(
            "/{key}",
            get(site_settings::get_by_key).put(site_settings::upsert),
        )
}
