//! Well-known role name constants.
//!
//! These must match the `users.role` default in `create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
