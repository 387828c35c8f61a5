//! User rows.

use cinema_core::types::DbId;
use cinema_core::user::User;
use sqlx::FromRow;

/// A row from the `users` table. `password` holds the PHC hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.username,
            password_hash: row.password,
            role: row.role,
        }
    }
}
