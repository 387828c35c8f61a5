//! User entity.

use serde::Serialize;

use crate::types::DbId;

/// A registered user.
///
/// `password_hash` is a PHC string and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: DbId,
    #[serde(rename = "username")]
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
}
