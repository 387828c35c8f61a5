//! Shared response envelope types for API handlers.
//!
//! All successful JSON responses use a `{ "data": ... }` envelope. Lists are
//! always arrays, so an empty result is `{ "data": [] }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
