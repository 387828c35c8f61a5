pub mod actor;
pub mod auth;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user (auth)
///
/// /actors                                          list (auth), create (admin)
/// /actors/{id}                                     get (auth), update, delete (admin)
/// /actors/{id}/movies                              movies of actor (auth)
///
/// /movies                                          list (auth), create (admin)
/// /movies/{id}                                     get (auth), update, delete (admin)
/// /movies/{id}/actors                              cast (auth), add actor (admin)
/// /movies/{id}/actors/{actor_id}                   remove actor (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/actors", actor::router())
        .nest("/movies", movie::router())
}
