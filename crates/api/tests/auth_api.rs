//! HTTP-level tests for registration, login and session resolution.

mod common;

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use common::{body_json, build_test_app, get, get_auth, post_json, TEST_PASSWORD};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn register_returns_created_user_without_password() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/auth/register",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "alice");
    assert_eq!(json["data"]["role"], "user");
    assert!(json["data"]["id"].as_i64().unwrap() > 0);
    assert!(json["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_duplicate_name_conflicts() {
    let app = build_test_app();
    let body = json!({ "username": "alice", "password": TEST_PASSWORD });

    let first = post_json(app.router.clone(), "/api/v1/auth/register", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app.router.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "USER_ALREADY_EXISTS");
}

#[tokio::test]
async fn register_rejects_empty_fields() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/auth/register",
        json!({ "username": "", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "EMPTY_NAME");

    let response = post_json(
        app.router.clone(),
        "/api/v1/auth/register",
        json!({ "username": "alice" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "EMPTY_PASSWORD");
}

#[tokio::test]
async fn login_sets_session_cookie_and_returns_token() {
    let app = build_test_app();
    let body = json!({ "username": "alice", "password": TEST_PASSWORD });
    post_json(app.router.clone(), "/api/v1/auth/register", body.clone()).await;

    let response = post_json(app.router.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("Authorization="));
    assert!(cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    let token = json["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(cookie.contains(token));
    assert_eq!(json["data"]["user"]["username"], "alice");
    assert!(json["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = build_test_app();
    post_json(
        app.router.clone(),
        "/api/v1/auth/register",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
    )
    .await;

    let response = post_json(
        app.router.clone(),
        "/api/v1/auth/login",
        json!({ "username": "alice", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_LOGIN");
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let app = build_test_app();

    let response = post_json(
        app.router.clone(),
        "/api/v1/auth/login",
        json!({ "username": "nobody", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_LOGIN");
}

#[tokio::test]
async fn me_accepts_bearer_header() {
    let app = build_test_app();
    let token = common::user_token(&app).await;

    let response = get_auth(app.router.clone(), "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["username"], "viewer");
}

#[tokio::test]
async fn me_accepts_session_cookie() {
    let app = build_test_app();
    let token = common::user_token(&app).await;

    let request = Request::builder()
        .uri("/api/v1/auth/me")
        .header(COOKIE, format!("Authorization={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["username"], "viewer");
}

#[tokio::test]
async fn me_reflects_granted_admin_role() {
    let app = build_test_app();
    let token = common::admin_token(&app).await;

    let response = get_auth(app.router.clone(), "/api/v1/auth/me", &token).await;
    assert_eq!(body_json(response).await["data"]["role"], "admin");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = build_test_app();

    let response = get(app.router.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_token_is_invalid_session() {
    let app = build_test_app();

    let response = get_auth(app.router.clone(), "/api/v1/auth/me", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "INVALID_SESSION");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = build_test_app();

    let response = get(app.router.clone(), "/api/v1/auth/me").await;
    assert!(response.headers().contains_key("x-request-id"));
}
