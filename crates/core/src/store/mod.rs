//! Persistence contract used by the services.
//!
//! The traits are object-safe (`async_trait`) so services hold them as
//! `Arc<dyn _>`. Mutations that target a single row report whether a row
//! was affected instead of failing, so callers can turn a lost race into
//! the matching "not exists" error.
//!
//! Implementations: `cinema_db::PgStore` (PostgreSQL) and
//! [`memory::MemoryStore`] (in-process).

pub mod memory;

use async_trait::async_trait;

use crate::actor::{Actor, NewActor};
use crate::movie::{Movie, NewMovie};
use crate::types::{BoxError, DbId};
use crate::user::User;

/// Opaque storage failure.
#[derive(Debug, thiserror::Error)]
#[error("storage error: {0}")]
pub struct StoreError(#[source] BoxError);

impl StoreError {
    pub fn new(err: impl Into<BoxError>) -> Self {
        StoreError(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn add_actor(&self, actor: &NewActor) -> StoreResult<Actor>;
    async fn get_actor_by_id(&self, id: DbId) -> StoreResult<Option<Actor>>;
    async fn list_actors(&self) -> StoreResult<Vec<Actor>>;
    /// Replace every field. Returns `false` if no row with `id` exists.
    async fn update_actor(&self, id: DbId, actor: &NewActor) -> StoreResult<bool>;
    /// Delete the actor and its movie associations. Returns `false` if absent.
    async fn delete_actor(&self, id: DbId) -> StoreResult<bool>;
    async fn actor_exists(&self, id: DbId) -> StoreResult<bool>;
    /// Movies the actor appears in, each with its full cast.
    async fn list_movies_by_actor(&self, id: DbId) -> StoreResult<Vec<Movie>>;
}

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Insert the movie and its actor associations atomically.
    async fn add_movie(&self, movie: &NewMovie) -> StoreResult<Movie>;
    /// Returns `false` if the association already existed.
    async fn add_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool>;
    /// Returns `false` if there was no such association.
    async fn remove_actor_from_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool>;
    async fn actor_in_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool>;
    async fn get_movie_by_id(&self, id: DbId) -> StoreResult<Option<Movie>>;
    async fn get_actors_by_movie_id(&self, id: DbId) -> StoreResult<Vec<Actor>>;
    /// Every movie with its cast, ordered by id. Casts are ordered by actor id.
    async fn list_movies(&self) -> StoreResult<Vec<Movie>>;
    /// Replace scalar fields and the actor set atomically. Returns `false`
    /// if no row with `id` exists.
    async fn update_movie(&self, id: DbId, movie: &NewMovie) -> StoreResult<bool>;
    async fn delete_movie(&self, id: DbId) -> StoreResult<bool>;
    async fn movie_exists(&self, id: DbId) -> StoreResult<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user with the default role. Returns `None` if the name is taken.
    async fn add_user(&self, name: &str, password_hash: &str) -> StoreResult<Option<User>>;
    async fn user_exists(&self, name: &str) -> StoreResult<bool>;
    async fn get_user_by_name(&self, name: &str) -> StoreResult<Option<User>>;
    async fn get_user_by_id(&self, id: DbId) -> StoreResult<Option<User>>;
}
