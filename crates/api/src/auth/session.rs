//! Registration, login and session verification over a [`UserStore`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cinema_core::error::CoreError;
use cinema_core::store::UserStore;
use cinema_core::types::DbId;
use cinema_core::user::User;
use serde::Serialize;

use super::jwt::{issue_token_at, verify_token_at, JwtConfig};
use super::password::{hash_password, verify_password, PasswordConfig};
use crate::middleware::auth::AuthUser;

/// A freshly issued session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

/// Auth business service, independent of the HTTP layer.
pub struct SessionService {
    users: Arc<dyn UserStore>,
    jwt: JwtConfig,
    password: PasswordConfig,
    /// Hash verified against when the login name is unknown, so both
    /// rejection paths pay for one Argon2 verification.
    placeholder_hash: Option<String>,
}

/// Plaintext behind [`SessionService`]'s placeholder hash.
const PLACEHOLDER_PASSWORD: &str = "cinema-login-placeholder";

impl SessionService {
    pub fn new(users: Arc<dyn UserStore>, jwt: JwtConfig, password: PasswordConfig) -> Self {
        let placeholder_hash = match hash_password(PLACEHOLDER_PASSWORD, &password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::warn!(error = %e, "Can't build login placeholder hash");
                None
            }
        };
        Self {
            users,
            jwt,
            password,
            placeholder_hash,
        }
    }

    /// Register a user with the default role.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, name: &str, password: &str) -> Result<User, CoreError> {
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        if password.is_empty() {
            return Err(CoreError::EmptyPassword);
        }

        let exists = self
            .users
            .user_exists(name)
            .await
            .map_err(|e| CoreError::internal("session service can't check user", e))?;
        if exists {
            return Err(CoreError::UserAlreadyExists);
        }

        let hash = hash_password(password, &self.password)
            .map_err(|e| CoreError::internal("session service can't hash password", e.to_string()))?;

        let user = self
            .users
            .add_user(name, &hash)
            .await
            .map_err(|e| CoreError::internal("session service can't add user", e))?
            .ok_or(CoreError::UserAlreadyExists)?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a session token.
    ///
    /// An unknown name and a wrong password fail the same way.
    pub async fn login(&self, name: &str, password: &str) -> Result<Session, CoreError> {
        self.login_at(name, password, Utc::now()).await
    }

    #[tracing::instrument(skip(self, password, now))]
    pub async fn login_at(
        &self,
        name: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, CoreError> {
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        if password.is_empty() {
            return Err(CoreError::EmptyPassword);
        }

        let user = self
            .users
            .get_user_by_name(name)
            .await
            .map_err(|e| CoreError::internal("session service can't get user", e))?;
        let Some(user) = user else {
            self.verify_placeholder(password);
            return Err(CoreError::InvalidLogin);
        };

        let valid = verify_password(password, &user.password_hash).map_err(|e| {
            CoreError::internal("session service can't verify password", e.to_string())
        })?;
        if !valid {
            tracing::info!(user_id = user.id, "Login rejected");
            return Err(CoreError::InvalidLogin);
        }

        let (token, expires_at) = issue_token_at(user.id, &user.role, now, &self.jwt)
            .map_err(|e| CoreError::internal("session service can't sign token", e))?;

        tracing::info!(user_id = user.id, %expires_at, "Session issued");
        Ok(Session {
            token,
            expires_at,
            user,
        })
    }

    /// Burn one password verification for a name that does not exist.
    /// Returns whether the verifier actually ran.
    fn verify_placeholder(&self, password: &str) -> bool {
        match &self.placeholder_hash {
            Some(hash) => verify_password(password, hash).is_ok(),
            None => false,
        }
    }

    /// Verify a session token against the current time.
    pub fn verify_session(&self, token: &str) -> Result<AuthUser, CoreError> {
        self.verify_session_at(token, Utc::now())
    }

    pub fn verify_session_at(&self, token: &str, now: DateTime<Utc>) -> Result<AuthUser, CoreError> {
        let claims = verify_token_at(token, now, &self.jwt)?;
        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }

    /// Fail with [`CoreError::NotAdmin`] unless `user` has `role`.
    pub fn require_role(user: &AuthUser, role: &str) -> Result<(), CoreError> {
        if user.role == role {
            Ok(())
        } else {
            Err(CoreError::NotAdmin)
        }
    }

    pub async fn get_user_by_name(&self, name: &str) -> Result<User, CoreError> {
        self.users
            .get_user_by_name(name)
            .await
            .map_err(|e| CoreError::internal("session service can't get user", e))?
            .ok_or(CoreError::UserNotExists)
    }

    pub async fn get_user_by_id(&self, id: DbId) -> Result<User, CoreError> {
        if id <= 0 {
            return Err(CoreError::UserNotExists);
        }
        self.users
            .get_user_by_id(id)
            .await
            .map_err(|e| CoreError::internal("session service can't get user", e))?
            .ok_or(CoreError::UserNotExists)
    }
}
