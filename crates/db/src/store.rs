//! [`PgStore`]: the `cinema_core::store` traits over PostgreSQL.

use std::collections::HashMap;

use async_trait::async_trait;
use cinema_core::actor::{Actor, NewActor};
use cinema_core::movie::{Movie, NewMovie};
use cinema_core::store::{ActorStore, MovieStore, StoreError, StoreResult, UserStore};
use cinema_core::types::DbId;
use cinema_core::user::User;

use crate::models::movie::MovieRow;
use crate::repositories::{ActorRepo, MovieRepo, UserRepo};
use crate::DbPool;

/// Store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Attach casts to movie rows with a single query.
    async fn hydrate(&self, rows: Vec<MovieRow>) -> StoreResult<Vec<Movie>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<DbId> = rows.iter().map(|m| m.id).collect();
        let cast_rows = ActorRepo::list_by_movies(&self.pool, &ids)
            .await
            .map_err(StoreError::new)?;

        tracing::trace!(movies = ids.len(), links = cast_rows.len(), "Hydrating casts");

        let mut casts: HashMap<DbId, Vec<Actor>> = HashMap::new();
        for row in cast_rows {
            let movie_id = row.movie_id;
            let actor = Actor::try_from(row).map_err(StoreError::new)?;
            casts.entry(movie_id).or_default().push(actor);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let cast = casts.remove(&row.id).unwrap_or_default();
                row.into_movie(cast)
            })
            .collect())
    }
}

#[async_trait]
impl ActorStore for PgStore {
    async fn add_actor(&self, actor: &NewActor) -> StoreResult<Actor> {
        let row = ActorRepo::create(&self.pool, actor)
            .await
            .map_err(StoreError::new)?;
        Actor::try_from(row).map_err(StoreError::new)
    }

    async fn get_actor_by_id(&self, id: DbId) -> StoreResult<Option<Actor>> {
        ActorRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::new)?
            .map(Actor::try_from)
            .transpose()
            .map_err(StoreError::new)
    }

    async fn list_actors(&self) -> StoreResult<Vec<Actor>> {
        ActorRepo::list(&self.pool)
            .await
            .map_err(StoreError::new)?
            .into_iter()
            .map(|row| Actor::try_from(row).map_err(StoreError::new))
            .collect()
    }

    async fn update_actor(&self, id: DbId, actor: &NewActor) -> StoreResult<bool> {
        ActorRepo::update(&self.pool, id, actor)
            .await
            .map_err(StoreError::new)
    }

    async fn delete_actor(&self, id: DbId) -> StoreResult<bool> {
        ActorRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn actor_exists(&self, id: DbId) -> StoreResult<bool> {
        ActorRepo::exists(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn list_movies_by_actor(&self, id: DbId) -> StoreResult<Vec<Movie>> {
        let rows = ActorRepo::list_movies(&self.pool, id)
            .await
            .map_err(StoreError::new)?;
        self.hydrate(rows).await
    }
}

#[async_trait]
impl MovieStore for PgStore {
    async fn add_movie(&self, movie: &NewMovie) -> StoreResult<Movie> {
        let row = MovieRepo::create(&self.pool, movie)
            .await
            .map_err(StoreError::new)?;
        let mut created = self.hydrate(vec![row]).await?;
        created
            .pop()
            .ok_or_else(|| StoreError::new("inserted movie vanished before it could be read"))
    }

    async fn add_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool> {
        MovieRepo::add_actor(&self.pool, movie_id, actor_id)
            .await
            .map_err(StoreError::new)
    }

    async fn remove_actor_from_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool> {
        MovieRepo::remove_actor(&self.pool, movie_id, actor_id)
            .await
            .map_err(StoreError::new)
    }

    async fn actor_in_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool> {
        MovieRepo::has_actor(&self.pool, movie_id, actor_id)
            .await
            .map_err(StoreError::new)
    }

    async fn get_movie_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        let Some(row) = MovieRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::new)?
        else {
            return Ok(None);
        };
        Ok(self.hydrate(vec![row]).await?.pop())
    }

    async fn get_actors_by_movie_id(&self, id: DbId) -> StoreResult<Vec<Actor>> {
        ActorRepo::list_by_movies(&self.pool, &[id])
            .await
            .map_err(StoreError::new)?
            .into_iter()
            .map(|row| Actor::try_from(row).map_err(StoreError::new))
            .collect()
    }

    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        let rows = MovieRepo::list(&self.pool)
            .await
            .map_err(StoreError::new)?;
        self.hydrate(rows).await
    }

    async fn update_movie(&self, id: DbId, movie: &NewMovie) -> StoreResult<bool> {
        MovieRepo::update(&self.pool, id, movie)
            .await
            .map_err(StoreError::new)
    }

    async fn delete_movie(&self, id: DbId) -> StoreResult<bool> {
        MovieRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }

    async fn movie_exists(&self, id: DbId) -> StoreResult<bool> {
        MovieRepo::exists(&self.pool, id)
            .await
            .map_err(StoreError::new)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn add_user(&self, name: &str, password_hash: &str) -> StoreResult<Option<User>> {
        let row = UserRepo::create(&self.pool, name, password_hash)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(User::from))
    }

    async fn user_exists(&self, name: &str) -> StoreResult<bool> {
        UserRepo::exists_by_username(&self.pool, name)
            .await
            .map_err(StoreError::new)
    }

    async fn get_user_by_name(&self, name: &str) -> StoreResult<Option<User>> {
        let row = UserRepo::find_by_username(&self.pool, name)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(User::from))
    }

    async fn get_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        let row = UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::new)?;
        Ok(row.map(User::from))
    }
}
