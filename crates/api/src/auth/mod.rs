//! Authentication and authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 session token issuance and verification.
//! - [`session`] -- registration, login and session checks over a user store.

pub mod jwt;
pub mod password;
pub mod session;
