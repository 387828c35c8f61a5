//! Session token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use cinema_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie set by login. Matches the header name.
pub const SESSION_COOKIE: &str = "Authorization";

/// Authenticated user extracted from a session token.
///
/// The token is read from `Authorization: Bearer <token>`, falling back to
/// the [`SESSION_COOKIE`] cookie.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"admin"`, `"user"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Missing session token".into()))?;

        let user = state.sessions.verify_session(&token)?;
        Ok(user)
    }
}

fn session_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|t| !t.is_empty())
}
