//! Tests for the `AppError` to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cinema_api::error::{classify_core_error, AppError};
use cinema_core::error::CoreError;
use http_body_util::BodyExt;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn validation_errors_are_bad_request() {
    for err in [
        CoreError::EmptyName,
        CoreError::InvalidGender,
        CoreError::TooLongTitle,
        CoreError::InvalidRating,
        CoreError::EmptyPassword,
    ] {
        let message = err.to_string();
        let (status, json) = render(AppError::Core(err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], message);
    }
}

#[test]
fn lookup_and_conflict_errors_map_to_stable_codes() {
    assert_eq!(
        classify_core_error(&CoreError::ActorNotExists),
        (StatusCode::NOT_FOUND, "ACTOR_NOT_EXISTS")
    );
    assert_eq!(
        classify_core_error(&CoreError::ActorNotInMovie),
        (StatusCode::NOT_FOUND, "ACTOR_NOT_IN_MOVIE")
    );
    assert_eq!(
        classify_core_error(&CoreError::ActorAlreadyInMovie),
        (StatusCode::CONFLICT, "ACTOR_ALREADY_IN_MOVIE")
    );
    assert_eq!(
        classify_core_error(&CoreError::UserAlreadyExists),
        (StatusCode::CONFLICT, "USER_ALREADY_EXISTS")
    );
    assert_eq!(
        classify_core_error(&CoreError::SessionExpired),
        (StatusCode::UNAUTHORIZED, "SESSION_EXPIRED")
    );
    assert_eq!(
        classify_core_error(&CoreError::NotAdmin),
        (StatusCode::FORBIDDEN, "NOT_ADMIN")
    );
}

#[tokio::test]
async fn internal_error_hides_details() {
    let err = CoreError::internal("movie service can't list movies", "connection reset by peer");
    let (status, json) = render(AppError::Core(err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn http_specific_errors() {
    let (status, json) = render(AppError::BadRequest("min_rating must be a number".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "min_rating must be a number");

    let (status, json) = render(AppError::Unauthorized("Missing session token".into())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}
