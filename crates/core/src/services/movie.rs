use std::sync::Arc;

use crate::actor::Actor;
use crate::error::CoreError;
use crate::listing::{filter_movies, sort_movies, MovieFilter, MovieSort};
use crate::movie::{validate_movie, Movie, MovieInput};
use crate::store::{ActorStore, MovieStore};
use crate::types::DbId;

/// Movie operations over a [`MovieStore`], with actor existence checked
/// through an [`ActorStore`].
///
/// Non-positive ids are rejected with the matching "not exists" error
/// without touching the store.
#[derive(Clone)]
pub struct MovieService {
    movies: Arc<dyn MovieStore>,
    actors: Arc<dyn ActorStore>,
}

impl MovieService {
    pub fn new(movies: Arc<dyn MovieStore>, actors: Arc<dyn ActorStore>) -> Self {
        Self { movies, actors }
    }

    /// Validate and insert a movie with its initial cast in one transaction.
    #[tracing::instrument(skip(self, input), fields(title = %input.title))]
    pub async fn add_movie(&self, input: &MovieInput) -> Result<Movie, CoreError> {
        let movie = validate_movie(input)?;
        for actor_id in &movie.actor_ids {
            self.ensure_actor_exists(*actor_id).await?;
        }

        let movie = self
            .movies
            .add_movie(&movie)
            .await
            .map_err(|e| CoreError::internal("movie service can't add movie", e))?;
        tracing::info!(movie_id = movie.id, cast = movie.actors.len(), "Movie created");
        Ok(movie)
    }

    /// Link an actor to a movie. Both must exist and not already be linked.
    #[tracing::instrument(skip(self))]
    pub async fn add_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> Result<(), CoreError> {
        self.ensure_actor_exists(actor_id).await?;
        self.ensure_movie_exists(movie_id).await?;

        let linked = self
            .movies
            .actor_in_movie(actor_id, movie_id)
            .await
            .map_err(|e| CoreError::internal("movie service can't check movie cast", e))?;
        if linked {
            return Err(CoreError::ActorAlreadyInMovie);
        }

        let inserted = self
            .movies
            .add_actor_to_movie(actor_id, movie_id)
            .await
            .map_err(|e| CoreError::internal("movie service can't add actor to movie", e))?;
        if !inserted {
            return Err(CoreError::ActorAlreadyInMovie);
        }
        tracing::info!(actor_id, movie_id, "Actor added to movie");
        Ok(())
    }

    /// Unlink an actor from a movie.
    #[tracing::instrument(skip(self))]
    pub async fn remove_actor_from_movie(
        &self,
        actor_id: DbId,
        movie_id: DbId,
    ) -> Result<(), CoreError> {
        self.ensure_actor_exists(actor_id).await?;
        self.ensure_movie_exists(movie_id).await?;

        let removed = self
            .movies
            .remove_actor_from_movie(actor_id, movie_id)
            .await
            .map_err(|e| CoreError::internal("movie service can't remove actor from movie", e))?;
        if !removed {
            return Err(CoreError::ActorNotInMovie);
        }
        tracing::info!(actor_id, movie_id, "Actor removed from movie");
        Ok(())
    }

    pub async fn get_movie_by_id(&self, id: DbId) -> Result<Movie, CoreError> {
        if id <= 0 {
            return Err(CoreError::MovieNotExists);
        }
        self.movies
            .get_movie_by_id(id)
            .await
            .map_err(|e| CoreError::internal("movie service can't get movie", e))?
            .ok_or(CoreError::MovieNotExists)
    }

    pub async fn get_actors_by_movie_id(&self, id: DbId) -> Result<Vec<Actor>, CoreError> {
        self.ensure_movie_exists(id).await?;
        self.movies
            .get_actors_by_movie_id(id)
            .await
            .map_err(|e| CoreError::internal("movie service can't get movie cast", e))
    }

    /// Fetch every movie, then filter and sort in memory.
    pub async fn list_movies(
        &self,
        filter: Option<&MovieFilter>,
        sort: MovieSort,
    ) -> Result<Vec<Movie>, CoreError> {
        let movies = self
            .movies
            .list_movies()
            .await
            .map_err(|e| CoreError::internal("movie service can't list movies", e))?;

        let mut movies = filter_movies(movies, filter);
        sort_movies(&mut movies, sort);
        Ok(movies)
    }

    /// Replace scalar fields and the cast of an existing movie in one
    /// transaction.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_movie(&self, id: DbId, input: &MovieInput) -> Result<Movie, CoreError> {
        self.ensure_movie_exists(id).await?;
        let movie = validate_movie(input)?;
        for actor_id in &movie.actor_ids {
            self.ensure_actor_exists(*actor_id).await?;
        }

        let updated = self
            .movies
            .update_movie(id, &movie)
            .await
            .map_err(|e| CoreError::internal("movie service can't update movie", e))?;
        if !updated {
            return Err(CoreError::MovieNotExists);
        }
        tracing::info!(movie_id = id, "Movie updated");

        self.get_movie_by_id(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_movie(&self, id: DbId) -> Result<(), CoreError> {
        self.ensure_movie_exists(id).await?;
        let deleted = self
            .movies
            .delete_movie(id)
            .await
            .map_err(|e| CoreError::internal("movie service can't delete movie", e))?;
        if !deleted {
            return Err(CoreError::MovieNotExists);
        }
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    async fn ensure_actor_exists(&self, id: DbId) -> Result<(), CoreError> {
        if id <= 0 {
            return Err(CoreError::ActorNotExists);
        }
        let exists = self
            .actors
            .actor_exists(id)
            .await
            .map_err(|e| CoreError::internal("movie service can't check actor", e))?;
        if exists {
            Ok(())
        } else {
            Err(CoreError::ActorNotExists)
        }
    }

    async fn ensure_movie_exists(&self, id: DbId) -> Result<(), CoreError> {
        if id <= 0 {
            return Err(CoreError::MovieNotExists);
        }
        let exists = self
            .movies
            .movie_exists(id)
            .await
            .map_err(|e| CoreError::internal("movie service can't check movie", e))?;
        if exists {
            Ok(())
        } else {
            Err(CoreError::MovieNotExists)
        }
    }
}
