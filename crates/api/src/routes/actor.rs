//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// PATCH  /{id}         -> update
/// DELETE /{id}         -> delete
/// GET    /{id}/movies  -> list_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list).post(actor::create))
        .route(
            "/{id}",
            get(actor::get_by_id)
                .put(actor::update)
                .patch(actor::update)
                .delete(actor::delete),
        )
        .route("/{id}/movies", get(actor::list_movies))
}
