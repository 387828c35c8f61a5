use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinema_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinema_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No credential was presented.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// HTTP status and stable error code for a domain error.
pub fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str) {
    match err {
        CoreError::EmptyName => (StatusCode::BAD_REQUEST, "EMPTY_NAME"),
        CoreError::FutureBirthDate => (StatusCode::BAD_REQUEST, "FUTURE_BIRTH_DATE"),
        CoreError::EmptyBirthDate => (StatusCode::BAD_REQUEST, "EMPTY_BIRTH_DATE"),
        CoreError::InvalidGender => (StatusCode::BAD_REQUEST, "INVALID_GENDER"),
        CoreError::EmptyTitle => (StatusCode::BAD_REQUEST, "EMPTY_TITLE"),
        CoreError::TooLongTitle => (StatusCode::BAD_REQUEST, "TOO_LONG_TITLE"),
        CoreError::EmptyDescription => (StatusCode::BAD_REQUEST, "EMPTY_DESCRIPTION"),
        CoreError::TooLongDescription => (StatusCode::BAD_REQUEST, "TOO_LONG_DESCRIPTION"),
        CoreError::InvalidRating => (StatusCode::BAD_REQUEST, "INVALID_RATING"),
        CoreError::EmptyReleaseDate => (StatusCode::BAD_REQUEST, "EMPTY_RELEASE_DATE"),
        CoreError::EmptyPassword => (StatusCode::BAD_REQUEST, "EMPTY_PASSWORD"),

        CoreError::ActorNotExists => (StatusCode::NOT_FOUND, "ACTOR_NOT_EXISTS"),
        CoreError::MovieNotExists => (StatusCode::NOT_FOUND, "MOVIE_NOT_EXISTS"),
        CoreError::ActorNotInMovie => (StatusCode::NOT_FOUND, "ACTOR_NOT_IN_MOVIE"),
        CoreError::UserNotExists => (StatusCode::NOT_FOUND, "USER_NOT_EXISTS"),

        CoreError::ActorAlreadyInMovie => (StatusCode::CONFLICT, "ACTOR_ALREADY_IN_MOVIE"),
        CoreError::UserAlreadyExists => (StatusCode::CONFLICT, "USER_ALREADY_EXISTS"),

        CoreError::InvalidLogin => (StatusCode::UNAUTHORIZED, "INVALID_LOGIN"),
        CoreError::InvalidSession => (StatusCode::UNAUTHORIZED, "INVALID_SESSION"),
        CoreError::SessionExpired => (StatusCode::UNAUTHORIZED, "SESSION_EXPIRED"),

        CoreError::NotAdmin => (StatusCode::FORBIDDEN, "NOT_ADMIN"),

        CoreError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core @ CoreError::Internal { context, source }) => {
                tracing::error!(
                    error = %source,
                    cause = ?source.source(),
                    context = %context,
                    "Internal core error"
                );
                let (status, code) = classify_core_error(core);
                (status, code, "An internal error occurred".to_string())
            }
            AppError::Core(core) => {
                let (status, code) = classify_core_error(core);
                (status, code, core.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
