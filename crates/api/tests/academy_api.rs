//! HTTP-level integration tests for the academy resource: year-partitioned
//! ordering and the distinct-years filter payload.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, get, post_json_auth};
use sqlx::PgPool;

fn academy_body(title: &str, year: i32) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A test case study",
        "year": year,
        "is_published": true,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_list_orders_by_year_desc_and_reports_years(pool: PgPool) {
    let token = admin_token(&pool).await;

    for (title, year) in [("Water Quality", 2023), ("Sorting Arm", 2025), ("Smart Farm", 2025)] {
        let app = build_test_app(pool.clone());
        let response =
            post_json_auth(app, "/api/v1/admin/academy", &token, academy_body(title, year)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/academy").await).await;

    assert_eq!(json["total"], 3);
    // Newest year first, then creation order within the year.
    assert_eq!(json["data"][0]["title"], "Sorting Arm");
    assert_eq!(json["data"][1]["title"], "Smart Farm");
    assert_eq!(json["data"][2]["title"], "Water Quality");
    // Distinct years across all published rows, newest first.
    assert_eq!(json["years"], serde_json::json!([2025, 2023]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_year_facet_filters_public_list(pool: PgPool) {
    let token = admin_token(&pool).await;

    for (title, year) in [("Old Study", 2022), ("New Study", 2025)] {
        let app = build_test_app(pool.clone());
        post_json_auth(app, "/api/v1/admin/academy", &token, academy_body(title, year)).await;
    }

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/academy?year=2022").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["title"], "Old Study");
    // The years list still covers the whole published collection.
    assert_eq!(json["years"], serde_json::json!([2025, 2022]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_detail_by_slug(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/admin/academy",
        &token,
        academy_body("Fuzzy Feeder", 2024),
    )
    .await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/academy/fuzzy-feeder").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["year"], 2024);
}
