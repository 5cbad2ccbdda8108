//! HTTP-level integration tests for landing sections (fixed seeded set,
//! natural-key addressing, visibility toggle, reorder) and site settings.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, get, get_auth, patch_json_auth, put_json_auth,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_list_returns_seeded_sections_in_order(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/landing-sections").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sections = json["data"].as_array().unwrap();
    assert_eq!(sections.len(), 8);
    assert_eq!(sections[0]["section_key"], "hero");
    assert_eq!(sections[7]["section_key"], "contact");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visibility_toggle_hides_from_public(pool: PgPool) {
    let token = admin_token(&pool).await;

    // Empty body inverts the stored flag (seeded visible -> hidden).
    let app = build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/admin/landing-sections/services/visibility",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_visible"], false);

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/landing-sections").await).await;
    let keys: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["section_key"].as_str().unwrap())
        .collect();
    assert!(!keys.contains(&"services"));

    // Admin still sees everything.
    let app = build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/admin/landing-sections", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 8);

    // Explicit value sets the flag directly.
    let app = build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/admin/landing-sections/services/visibility",
        &token,
        serde_json::json!({ "is_visible": true }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_visible"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_by_key(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/admin/landing-sections/hero",
        &token,
        serde_json::json!({ "title": "A Better Hero" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "A Better Hero");

    // Unknown key is a 404, not an implicit create.
    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/admin/landing-sections/nonexistent",
        &token,
        serde_json::json!({ "title": "X" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sections_reorder(pool: PgPool) {
    let token = admin_token(&pool).await;

    // Move the contact section to the top.
    let app = build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/admin/landing-sections", &token).await).await;
    let contact_id = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["section_key"] == "contact")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let app = build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/admin/landing-sections/reorder",
        &token,
        serde_json::json!({ "items": [{ "id": contact_id, "sort_order": 0 }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/landing-sections").await).await;
    assert_eq!(json["data"][0]["section_key"], "contact");
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_settings_public_object_and_upsert(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/site-settings").await).await;
    assert_eq!(json["data"]["brand_name"], "rynvlabs");

    // Upsert an existing key and a brand-new one.
    let token = admin_token(&pool).await;
    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/admin/site-settings/brand_name",
        &token,
        serde_json::json!("renamed"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/admin/site-settings/tagline",
        &token,
        serde_json::json!({ "id": "hero", "text": "Engineering, end to end" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/site-settings").await).await;
    assert_eq!(json["data"]["brand_name"], "renamed");
    assert_eq!(json["data"]["tagline"]["text"], "Engineering, end to end");
}
