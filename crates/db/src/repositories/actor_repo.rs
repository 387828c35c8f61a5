//! Repository for the `actors` table.

use cinema_core::actor::NewActor;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{ActorRow, CastRow};
use crate::models::movie::MovieRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, gender, birth_date";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewActor) -> Result<ActorRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, gender, birth_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActorRow>(&query)
            .bind(&input.name)
            .bind(input.gender.code())
            .bind(input.birth_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ActorRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, ActorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actors ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ActorRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, ActorRow>(&query).fetch_all(pool).await
    }

    /// Replace every field. Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, input: &NewActor) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actors SET name = $2, gender = $3, birth_date = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.gender.code())
        .bind(input.birth_date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an actor. Cast links go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM actors WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Cast of every movie in `movie_ids`, ordered by movie then actor id.
    pub async fn list_by_movies(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<Vec<CastRow>, sqlx::Error> {
        sqlx::query_as::<_, CastRow>(
            "SELECT ma.movie_id, a.id, a.name, a.gender, a.birth_date
             FROM movie_actors ma
             JOIN actors a ON a.id = ma.actor_id
             WHERE ma.movie_id = ANY($1)
             ORDER BY ma.movie_id, a.id",
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await
    }

    /// Movies the actor appears in, ordered by movie id.
    pub async fn list_movies(pool: &PgPool, actor_id: DbId) -> Result<Vec<MovieRow>, sqlx::Error> {
        sqlx::query_as::<_, MovieRow>(
            "SELECT m.id, m.title, m.description, m.release_date, m.rating
             FROM movies m
             JOIN movie_actors ma ON ma.movie_id = m.id
             WHERE ma.actor_id = $1
             ORDER BY m.id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}
