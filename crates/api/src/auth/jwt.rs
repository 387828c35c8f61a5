//! HS256 session tokens.
//!
//! Tokens carry a [`Claims`] payload and expire a configurable number of
//! calendar months after issue. Only HS256 is accepted on verification, and
//! expiry is checked against an explicit `now` with no leeway.

use chrono::{DateTime, Months, Utc};
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's role name (e.g. `"admin"`, `"user"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for session token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in calendar months (default: 1).
    pub session_months: u32,
}

/// Default session lifetime in calendar months.
const DEFAULT_SESSION_MONTHS: u32 = 1;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var              | Required | Default |
    /// |----------------------|----------|---------|
    /// | `JWT_SECRET`         | **yes**  | --      |
    /// | `JWT_SESSION_MONTHS` | no       | `1`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let session_months: u32 = std::env::var("JWT_SESSION_MONTHS")
            .unwrap_or_else(|_| DEFAULT_SESSION_MONTHS.to_string())
            .parse()
            .expect("JWT_SESSION_MONTHS must be a valid u32");

        Self {
            secret,
            session_months,
        }
    }
}

/// Issue a token for `user_id` as of `now`.
///
/// Returns the encoded token and its expiry instant.
pub fn issue_token_at(
    user_id: DbId,
    role: &str,
    now: DateTime<Utc>,
    config: &JwtConfig,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let expires_at = now
        .checked_add_months(Months::new(config.session_months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;
    Ok((token, expires_at))
}

/// Verify a token as of `now`, returning the embedded [`Claims`].
///
/// A bad signature, a non-HS256 algorithm or a malformed token fails with
/// [`CoreError::InvalidSession`]; `now >= exp` fails with
/// [`CoreError::SessionExpired`].
pub fn verify_token_at(
    token: &str,
    now: DateTime<Utc>,
    config: &JwtConfig,
) -> Result<Claims, CoreError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below against the caller's clock.
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|_| CoreError::InvalidSession)?
    .claims;

    if now.timestamp() >= claims.exp {
        return Err(CoreError::SessionExpired);
    }
    Ok(claims)
}
