//! Handlers for the `/auth` resource (register, login, current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cinema_core::user::User;
use serde::Deserialize;

use crate::auth::session::Session;
use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, SESSION_COOKIE};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/login`.
///
/// Missing fields decode as empty strings and fail domain validation.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    let user = state
        .sessions
        .register(&input.username, &input.password)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// POST /api/v1/auth/login
///
/// Returns the session in the body and also sets it as an HTTP-only cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(CookieJar, Json<DataResponse<Session>>)> {
    let session = state
        .sessions
        .login(&input.username, &input.password)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE, session.token.clone()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Json(DataResponse { data: session })))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<DataResponse<User>>> {
    let user = state.sessions.get_user_by_id(user.user_id).await?;
    Ok(Json(DataResponse { data: user }))
}
