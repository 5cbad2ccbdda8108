pub mod academy;
pub mod auth;
pub mod categories;
pub mod health;
pub mod landing_sections;
pub mod media;
pub mod products;
pub mod projects;
pub mod site_settings;
pub mod tech_stacks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                login (public)
/// /auth/me                                   profile (requires auth)
///
/// /projects                                  public list (search, category, page, limit)
/// /projects/{slug}                           public detail
/// /academy                                   public list (search, year, page, limit; +years)
/// /academy/{slug}                            public detail
/// /products                                  public list
/// /products/{slug}                           public detail
/// /categories                                public list (type)
/// /tech-stacks                               public list
/// /landing-sections                          public list (visible only)
/// /site-settings                             public key/value object
///
/// /admin/projects                            list, create
/// /admin/projects/reorder                    bulk reorder (PATCH)
/// /admin/projects/{id}                       get, update, delete
/// /admin/projects/{id}/publish               publish toggle (PATCH)
/// /admin/academy                             same shape as projects
/// /admin/products                            same shape as projects
/// /admin/categories                          list, create, reorder, update, delete
/// /admin/tech-stacks                         list, create, reorder, update, delete
/// /admin/landing-sections                    list, reorder
/// /admin/landing-sections/{section_key}      get, update
/// /admin/landing-sections/{key}/visibility   visibility toggle (PATCH)
/// /admin/site-settings                       list
/// /admin/site-settings/{key}                 get, upsert (PUT)
/// /admin/media                               list, upload
/// /admin/media/{id}                          delete
/// ```
///
/// Admin handlers enforce authentication individually via the `AuthAdmin`
/// extractor; public handlers take no auth parameter.
pub fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .nest("/projects", projects::admin_router())
        .nest("/academy", academy::admin_router())
        .nest("/products", products::admin_router())
        .nest("/categories", categories::admin_router())
        .nest("/tech-stacks", tech_stacks::admin_router())
        .nest("/landing-sections", landing_sections::admin_router())
        .nest("/site-settings", site_settings::admin_router())
        .nest("/media", media::admin_router());

    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", projects::public_router())
        .nest("/academy", academy::public_router())
        .nest("/products", products::public_router())
        .nest("/categories", categories::public_router())
        .nest("/tech-stacks", tech_stacks::public_router())
        .nest("/landing-sections", landing_sections::public_router())
        .nest("/site-settings", site_settings::public_router())
        .nest("/admin", admin)
}
