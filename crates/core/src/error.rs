//! Closed taxonomy of domain errors.
//!
//! Validation and existence failures are unit variants so callers can match
//! them exactly. Infrastructure failures (storage, hashing, token signing)
//! are wrapped in [`CoreError::Internal`] with a short call-site context and
//! the underlying error kept as the `source()`.

use crate::types::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    // -- actor validation --
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Birth date cannot be in the future")]
    FutureBirthDate,
    #[error("Birth date cannot be empty")]
    EmptyBirthDate,
    #[error("Invalid gender. Can be 'unknown', 'male', 'female', 'not applicable'")]
    InvalidGender,

    // -- movie validation --
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title is too long (max 100 characters)")]
    TooLongTitle,
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Description is too long (max 1000 characters)")]
    TooLongDescription,
    #[error("Rating must be between 0 and 10")]
    InvalidRating,
    #[error("Release date cannot be empty")]
    EmptyReleaseDate,

    // -- existence / state --
    #[error("Actor does not exist")]
    ActorNotExists,
    #[error("Movie does not exist")]
    MovieNotExists,
    #[error("Actor is already in this movie")]
    ActorAlreadyInMovie,
    #[error("Actor is not in this movie")]
    ActorNotInMovie,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User does not exist")]
    UserNotExists,

    // -- auth --
    #[error("Invalid username or password")]
    InvalidLogin,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Not allowed")]
    NotAdmin,
    #[error("Invalid session token")]
    InvalidSession,
    #[error("Session has expired")]
    SessionExpired,

    /// Unexpected infrastructure failure.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl CoreError {
    /// Wrap an infrastructure error with a short description of the call site.
    pub fn internal(context: &'static str, source: impl Into<BoxError>) -> Self {
        CoreError::Internal {
            context,
            source: source.into(),
        }
    }
}
