//! HTTP-level integration tests for the bulk reorder operation:
//! end-to-end drag-and-drop flow, atomic rollback on bad ids, payload
//! validation, and idempotence.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, get_auth, patch_json_auth, post_json_auth};
use sqlx::PgPool;

fn project_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A test project",
        "category": "IOT",
    })
}

/// Create three projects and return their ids in creation order.
async fn create_three_projects(pool: &PgPool, token: &str) -> Vec<i64> {
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let app = build_test_app(pool.clone());
        let response =
            post_json_auth(app, "/api/v1/admin/projects", token, project_body(title)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(body_json(response).await["data"]["id"].as_i64().unwrap());
    }
    ids
}

/// Fetch the admin list and return project ids in display order.
async fn admin_order(pool: &PgPool, token: &str) -> Vec<i64> {
    let app = build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/admin/projects", token).await).await;
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_scenario_three_projects(pool: PgPool) {
    let token = admin_token(&pool).await;
    let ids = create_three_projects(&pool, &token).await;

    // Created order is 1, 2, 3 by sort_order.
    assert_eq!(admin_order(&pool, &token).await, ids);

    // Submit [{id:3, 1}, {id:1, 2}, {id:2, 3}].
    let app = build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/admin/projects/reorder",
        &token,
        serde_json::json!({ "items": [
            { "id": ids[2], "sort_order": 1 },
            { "id": ids[0], "sort_order": 2 },
            { "id": ids[1], "sort_order": 3 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["success"], true);

    assert_eq!(admin_order(&pool, &token).await, vec![ids[2], ids[0], ids[1]]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_unknown_id_is_atomic(pool: PgPool) {
    let token = admin_token(&pool).await;
    let ids = create_three_projects(&pool, &token).await;

    let app = build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/admin/projects/reorder",
        &token,
        serde_json::json!({ "items": [
            { "id": ids[0], "sort_order": 99 },
            { "id": 424242, "sort_order": 100 },
        ]}),
    )
    .await;
    // A single not-found error, never a partial-success report.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    // Nothing changed, including the valid first pair.
    assert_eq!(admin_order(&pool, &token).await, ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_cross_resource_id_is_atomic(pool: PgPool) {
    let token = admin_token(&pool).await;
    let ids = create_three_projects(&pool, &token).await;

    // A category id submitted to the project reorder endpoint. The seeded
    // categories share low ids with projects, so create a fresh one whose
    // id cannot collide with any project id.
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/categories",
        &token,
        serde_json::json!({ "name": "Rogue", "category_type": "PROJECT" }),
    )
    .await;
    let category_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    assert!(!ids.contains(&category_id));

    let app = build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/admin/projects/reorder",
        &token,
        serde_json::json!({ "items": [
            { "id": ids[0], "sort_order": 50 },
            { "id": category_id, "sort_order": 51 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(admin_order(&pool, &token).await, ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_empty_payload_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/admin/projects/reorder",
        &token,
        serde_json::json!({ "items": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_is_idempotent(pool: PgPool) {
    let token = admin_token(&pool).await;
    let ids = create_three_projects(&pool, &token).await;

    let payload = serde_json::json!({ "items": [
        { "id": ids[1], "sort_order": 1 },
        { "id": ids[2], "sort_order": 2 },
        { "id": ids[0], "sort_order": 3 },
    ]});

    for _ in 0..2 {
        let app = build_test_app(pool.clone());
        let response =
            patch_json_auth(app, "/api/v1/admin/projects/reorder", &token, payload.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(admin_order(&pool, &token).await, vec![ids[1], ids[2], ids[0]]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);
    let response = common::patch_json_auth(
        app,
        "/api/v1/admin/projects/reorder",
        "bogus-token",
        serde_json::json!({ "items": [{ "id": 1, "sort_order": 1 }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
