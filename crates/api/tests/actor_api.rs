//! HTTP-level tests for the actor endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, delete_auth, get, get_auth, patch_json_auth,
    post_json_auth, put_json_auth, user_token,
};
use serde_json::{json, Value};

async fn create_actor(app: &common::TestApp, token: &str, body: Value) -> Value {
    let response = post_json_auth(app.router.clone(), "/api/v1/actors", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[tokio::test]
async fn admin_creates_and_fetches_actor() {
    let app = build_test_app();
    let token = admin_token(&app).await;

    let actor = create_actor(
        &app,
        &token,
        json!({ "name": "Liv Ullmann", "gender": "female", "birth_date": "1938-12-16" }),
    )
    .await;
    assert_eq!(actor["name"], "Liv Ullmann");
    assert_eq!(actor["gender"], "female");
    assert_eq!(actor["birth_date"], "1938-12-16");

    let id = actor["id"].as_i64().unwrap();
    let response = get_auth(app.router.clone(), &format!("/api/v1/actors/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], actor);
}

#[tokio::test]
async fn regular_user_cannot_create_actor() {
    let app = build_test_app();
    let token = user_token(&app).await;

    let response = post_json_auth(
        app.router.clone(),
        "/api/v1/actors",
        json!({ "name": "Liv Ullmann", "gender": "female", "birth_date": "1938-12-16" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "NOT_ADMIN");
}

#[tokio::test]
async fn listing_requires_a_session() {
    let app = build_test_app();

    let response = get(app.router.clone(), "/api/v1/actors").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_actor_list_is_an_empty_array() {
    let app = build_test_app();
    let token = user_token(&app).await;

    let response = get_auth(app.router.clone(), "/api/v1/actors", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": [] }));
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let app = build_test_app();
    let token = admin_token(&app).await;

    let cases = [
        (
            json!({ "name": "", "gender": "male", "birth_date": "1950-01-01" }),
            "EMPTY_NAME",
        ),
        (json!({ "name": "A", "gender": "male" }), "EMPTY_BIRTH_DATE"),
        (
            json!({ "name": "A", "gender": "male", "birth_date": "2999-01-01" }),
            "FUTURE_BIRTH_DATE",
        ),
        (
            json!({ "name": "A", "gender": "robot", "birth_date": "1950-01-01" }),
            "INVALID_GENDER",
        ),
    ];

    for (body, code) in cases {
        let response = post_json_auth(app.router.clone(), "/api/v1/actors", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{code}");
        assert_eq!(body_json(response).await["code"], code);
    }
}

#[tokio::test]
async fn missing_actor_is_not_found() {
    let app = build_test_app();
    let token = admin_token(&app).await;

    let response = get_auth(app.router.clone(), "/api/v1/actors/999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "ACTOR_NOT_EXISTS");

    let response = delete_auth(app.router.clone(), "/api/v1/actors/999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_keeps_fields_that_were_not_sent() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let actor = create_actor(
        &app,
        &token,
        json!({ "name": "Max von Sydow", "gender": "male", "birth_date": "1929-04-10" }),
    )
    .await;
    let id = actor["id"].as_i64().unwrap();

    let response = patch_json_auth(
        app.router.clone(),
        &format!("/api/v1/actors/{id}"),
        json!({ "name": "Max Carl Adolf von Sydow" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["name"], "Max Carl Adolf von Sydow");
    assert_eq!(updated["gender"], "male");
    assert_eq!(updated["birth_date"], "1929-04-10");
}

#[tokio::test]
async fn put_validates_merged_actor() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let actor = create_actor(
        &app,
        &token,
        json!({ "name": "Bibi Andersson", "gender": "female", "birth_date": "1935-11-11" }),
    )
    .await;
    let id = actor["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.router.clone(),
        &format!("/api/v1/actors/{id}"),
        json!({ "gender": "unicorn" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_GENDER");
}

#[tokio::test]
async fn delete_removes_actor() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let actor = create_actor(
        &app,
        &token,
        json!({ "name": "Erland Josephson", "gender": "male", "birth_date": "1923-06-15" }),
    )
    .await;
    let uri = format!("/api/v1/actors/{}", actor["id"]);

    let response = delete_auth(app.router.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.router.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn actor_movies_lists_filmography() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let actor = create_actor(
        &app,
        &token,
        json!({ "name": "Gunnar Björnstrand", "gender": "male", "birth_date": "1909-11-13" }),
    )
    .await;
    let id = actor["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.router.clone(),
        "/api/v1/movies",
        json!({
            "title": "Winter Light",
            "description": "A pastor loses faith.",
            "release_date": "1963-02-11",
            "rating": 8.1,
            "actors": [id],
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        app.router.clone(),
        &format!("/api/v1/actors/{id}/movies"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let movies = body_json(response).await["data"].clone();
    assert_eq!(movies.as_array().unwrap().len(), 1);
    assert_eq!(movies[0]["title"], "Winter Light");

    let response = get_auth(app.router.clone(), "/api/v1/actors/999/movies", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
