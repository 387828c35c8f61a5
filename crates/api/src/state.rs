use std::sync::Arc;

use cinema_core::services::{ActorService, MovieService};

use crate::auth::session::SessionService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used by the health check.
    pub pool: cinema_db::DbPool,
    pub actors: ActorService,
    pub movies: MovieService,
    pub sessions: Arc<SessionService>,
}
