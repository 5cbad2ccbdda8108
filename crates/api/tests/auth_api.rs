//! HTTP-level integration tests for authentication: login, profile, and
//! enforcement on admin routes.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, create_test_admin, get, get_auth, post_json,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (admin, password) = create_test_admin(&pool).await;
    let app = build_test_app(pool);

    let body = serde_json::json!({ "email": admin.email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["admin"]["id"], admin.id);
    assert_eq!(json["admin"]["email"], "admin@test.com");
    assert_eq!(json["admin"]["name"], "Test Admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (admin, _password) = create_test_admin(&pool).await;
    let app = build_test_app(pool);

    let body = serde_json::json!({ "email": admin.email, "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email_same_error(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({ "email": "nobody@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    // Same status and code as a wrong password: no account enumeration.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_returns_profile(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "admin@test.com");
    // The password hash must never appear in a response.
    assert!(json["data"]["password_hash"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_missing_token(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/v1/admin/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/projects", "not-a-valid-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
