//! Route definitions for the `/movies` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                        -> list (?sort=&title=&released_since=&min_rating=)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// PATCH  /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/actors             -> list_actors
/// POST   /{id}/actors             -> add_actor
/// DELETE /{id}/actors/{actor_id}  -> remove_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .patch(movie::update)
                .delete(movie::delete),
        )
        .route(
            "/{id}/actors",
            get(movie::list_actors).post(movie::add_actor),
        )
        .route("/{id}/actors/{actor_id}", delete(movie::remove_actor))
}
