use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::actor::{validate_actor, Actor, ActorInput};
use crate::error::CoreError;
use crate::movie::Movie;
use crate::store::ActorStore;
use crate::types::DbId;

/// Actor operations over an [`ActorStore`].
///
/// Non-positive ids are rejected with [`CoreError::ActorNotExists`] without
/// touching the store.
#[derive(Clone)]
pub struct ActorService {
    store: Arc<dyn ActorStore>,
}

impl ActorService {
    pub fn new(store: Arc<dyn ActorStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add_actor(&self, input: &ActorInput) -> Result<Actor, CoreError> {
        let actor = validate_actor(input, today())?;
        let actor = self
            .store
            .add_actor(&actor)
            .await
            .map_err(|e| CoreError::internal("actor service can't add actor", e))?;
        tracing::info!(actor_id = actor.id, "Actor created");
        Ok(actor)
    }

    pub async fn get_actor_by_id(&self, id: DbId) -> Result<Actor, CoreError> {
        if id <= 0 {
            return Err(CoreError::ActorNotExists);
        }
        self.store
            .get_actor_by_id(id)
            .await
            .map_err(|e| CoreError::internal("actor service can't get actor", e))?
            .ok_or(CoreError::ActorNotExists)
    }

    /// Replace every field of an existing actor.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_actor(&self, id: DbId, input: &ActorInput) -> Result<Actor, CoreError> {
        self.ensure_exists(id).await?;
        let actor = validate_actor(input, today())?;

        let updated = self
            .store
            .update_actor(id, &actor)
            .await
            .map_err(|e| CoreError::internal("actor service can't update actor", e))?;
        if !updated {
            return Err(CoreError::ActorNotExists);
        }
        tracing::info!(actor_id = id, "Actor updated");

        Ok(Actor {
            id,
            name: actor.name,
            gender: actor.gender,
            birth_date: actor.birth_date,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_actor(&self, id: DbId) -> Result<(), CoreError> {
        self.ensure_exists(id).await?;
        let deleted = self
            .store
            .delete_actor(id)
            .await
            .map_err(|e| CoreError::internal("actor service can't delete actor", e))?;
        if !deleted {
            return Err(CoreError::ActorNotExists);
        }
        tracing::info!(actor_id = id, "Actor deleted");
        Ok(())
    }

    pub async fn list_actors(&self) -> Result<Vec<Actor>, CoreError> {
        self.store
            .list_actors()
            .await
            .map_err(|e| CoreError::internal("actor service can't list actors", e))
    }

    /// Movies the actor appears in.
    pub async fn list_movies_by_actor(&self, id: DbId) -> Result<Vec<Movie>, CoreError> {
        self.ensure_exists(id).await?;
        self.store
            .list_movies_by_actor(id)
            .await
            .map_err(|e| CoreError::internal("actor service can't list actor movies", e))
    }

    async fn ensure_exists(&self, id: DbId) -> Result<(), CoreError> {
        if id <= 0 {
            return Err(CoreError::ActorNotExists);
        }
        let exists = self
            .store
            .actor_exists(id)
            .await
            .map_err(|e| CoreError::internal("actor service can't check actor", e))?;
        if exists {
            Ok(())
        } else {
            Err(CoreError::ActorNotExists)
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
