//! Route definitions for the media library (admin only).

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Admin routes mounted at `/admin/media`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> upload (multipart)
/// DELETE /{id}   -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list).post(media::upload))
        .route("/{id}", delete(media::delete))
}
