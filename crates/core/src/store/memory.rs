//! In-process store backed by ordered maps behind a mutex.
//!
//! Used by unit and HTTP tests, and for running the services without a
//! database. Every operation takes the lock once, so multi-row writes are
//! atomic with respect to other callers.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{ActorStore, MovieStore, StoreError, StoreResult, UserStore};
use crate::actor::{Actor, NewActor};
use crate::movie::{Movie, NewMovie};
use crate::roles::ROLE_USER;
use crate::types::DbId;
use crate::user::User;

#[derive(Debug, Clone)]
struct MovieRow {
    title: String,
    description: String,
    release_date: NaiveDate,
    rating: f64,
    actor_ids: Vec<DbId>,
}

impl MovieRow {
    fn from_new(movie: &NewMovie) -> Self {
        Self {
            title: movie.title.clone(),
            description: movie.description.clone(),
            release_date: movie.release_date,
            rating: movie.rating,
            actor_ids: movie.actor_ids.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    last_id: DbId,
    actors: BTreeMap<DbId, Actor>,
    movies: BTreeMap<DbId, MovieRow>,
    users: BTreeMap<DbId, User>,
}

impl State {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    /// Cast ordered by actor id, matching the PostgreSQL store.
    fn cast(&self, row: &MovieRow) -> Vec<Actor> {
        let mut cast: Vec<Actor> = row
            .actor_ids
            .iter()
            .filter_map(|id| self.actors.get(id).cloned())
            .collect();
        cast.sort_by_key(|a| a.id);
        cast
    }

    fn hydrate(&self, id: DbId, row: &MovieRow) -> Movie {
        Movie {
            id,
            title: row.title.clone(),
            description: row.description.clone(),
            release_date: row.release_date,
            rating: row.rating,
            actors: self.cast(row),
        }
    }

    fn check_actors(&self, ids: &[DbId]) -> StoreResult<()> {
        match ids.iter().find(|id| !self.actors.contains_key(id)) {
            Some(missing) => Err(StoreError::new(format!(
                "foreign key violation: actor {missing} does not exist"
            ))),
            None => Ok(()),
        }
    }
}

/// Thread-safe in-memory implementation of every store trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> StoreResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| StoreError::new("memory store lock poisoned"))
    }

    /// Change a user's role. Returns `false` if the user does not exist.
    ///
    /// Mirrors granting a role directly in the database; there is no
    /// service operation for it.
    pub fn grant_role(&self, user_id: DbId, role: &str) -> StoreResult<bool> {
        let mut state = self.state()?;
        Ok(match state.users.get_mut(&user_id) {
            Some(user) => {
                user.role = role.to_string();
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl ActorStore for MemoryStore {
    async fn add_actor(&self, actor: &NewActor) -> StoreResult<Actor> {
        let mut state = self.state()?;
        let id = state.next_id();
        let actor = Actor {
            id,
            name: actor.name.clone(),
            gender: actor.gender,
            birth_date: actor.birth_date,
        };
        state.actors.insert(id, actor.clone());
        Ok(actor)
    }

    async fn get_actor_by_id(&self, id: DbId) -> StoreResult<Option<Actor>> {
        Ok(self.state()?.actors.get(&id).cloned())
    }

    async fn list_actors(&self) -> StoreResult<Vec<Actor>> {
        Ok(self.state()?.actors.values().cloned().collect())
    }

    async fn update_actor(&self, id: DbId, actor: &NewActor) -> StoreResult<bool> {
        let mut state = self.state()?;
        Ok(match state.actors.get_mut(&id) {
            Some(existing) => {
                existing.name = actor.name.clone();
                existing.gender = actor.gender;
                existing.birth_date = actor.birth_date;
                true
            }
            None => false,
        })
    }

    async fn delete_actor(&self, id: DbId) -> StoreResult<bool> {
        let mut state = self.state()?;
        if state.actors.remove(&id).is_none() {
            return Ok(false);
        }
        for row in state.movies.values_mut() {
            row.actor_ids.retain(|a| *a != id);
        }
        Ok(true)
    }

    async fn actor_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.state()?.actors.contains_key(&id))
    }

    async fn list_movies_by_actor(&self, id: DbId) -> StoreResult<Vec<Movie>> {
        let state = self.state()?;
        Ok(state
            .movies
            .iter()
            .filter(|(_, row)| row.actor_ids.contains(&id))
            .map(|(movie_id, row)| state.hydrate(*movie_id, row))
            .collect())
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn add_movie(&self, movie: &NewMovie) -> StoreResult<Movie> {
        let mut state = self.state()?;
        state.check_actors(&movie.actor_ids)?;
        let id = state.next_id();
        let row = MovieRow::from_new(movie);
        let created = state.hydrate(id, &row);
        state.movies.insert(id, row);
        Ok(created)
    }

    async fn add_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool> {
        let mut state = self.state()?;
        state.check_actors(&[actor_id])?;
        let row = state
            .movies
            .get_mut(&movie_id)
            .ok_or_else(|| StoreError::new(format!("movie {movie_id} does not exist")))?;
        if row.actor_ids.contains(&actor_id) {
            return Ok(false);
        }
        row.actor_ids.push(actor_id);
        Ok(true)
    }

    async fn remove_actor_from_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool> {
        let mut state = self.state()?;
        let Some(row) = state.movies.get_mut(&movie_id) else {
            return Ok(false);
        };
        let before = row.actor_ids.len();
        row.actor_ids.retain(|a| *a != actor_id);
        Ok(row.actor_ids.len() < before)
    }

    async fn actor_in_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<bool> {
        Ok(self
            .state()?
            .movies
            .get(&movie_id)
            .is_some_and(|row| row.actor_ids.contains(&actor_id)))
    }

    async fn get_movie_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        let state = self.state()?;
        Ok(state.movies.get(&id).map(|row| state.hydrate(id, row)))
    }

    async fn get_actors_by_movie_id(&self, id: DbId) -> StoreResult<Vec<Actor>> {
        let state = self.state()?;
        Ok(state
            .movies
            .get(&id)
            .map(|row| state.cast(row))
            .unwrap_or_default())
    }

    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        let state = self.state()?;
        Ok(state
            .movies
            .iter()
            .map(|(id, row)| state.hydrate(*id, row))
            .collect())
    }

    async fn update_movie(&self, id: DbId, movie: &NewMovie) -> StoreResult<bool> {
        let mut state = self.state()?;
        state.check_actors(&movie.actor_ids)?;
        Ok(match state.movies.get_mut(&id) {
            Some(row) => {
                *row = MovieRow::from_new(movie);
                true
            }
            None => false,
        })
    }

    async fn delete_movie(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.state()?.movies.remove(&id).is_some())
    }

    async fn movie_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.state()?.movies.contains_key(&id))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn add_user(&self, name: &str, password_hash: &str) -> StoreResult<Option<User>> {
        let mut state = self.state()?;
        if state.users.values().any(|u| u.name == name) {
            return Ok(None);
        }
        let id = state.next_id();
        let user = User {
            id,
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            role: ROLE_USER.to_string(),
        };
        state.users.insert(id, user.clone());
        Ok(Some(user))
    }

    async fn user_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.state()?.users.values().any(|u| u.name == name))
    }

    async fn get_user_by_name(&self, name: &str) -> StoreResult<Option<User>> {
        Ok(self
            .state()?
            .users
            .values()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn get_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.state()?.users.get(&id).cloned())
    }
}
