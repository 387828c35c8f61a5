//! Repository for the `movies` and `movie_actors` tables.

use cinema_core::movie::NewMovie;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, release_date, rating";

/// Provides CRUD operations for movies and their cast links.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and its cast links in one transaction.
    ///
    /// A missing actor fails the foreign key and rolls back the movie row.
    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<MovieRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (title, description, release_date, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id)
             SELECT $1, UNNEST($2::BIGINT[])",
        )
        .bind(movie.id)
        .bind(&input.actor_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(movie_id = movie.id, cast = input.actor_ids.len(), "Movie inserted");
        Ok(movie)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, MovieRow>(&query).fetch_all(pool).await
    }

    /// Replace scalar fields and the cast in one transaction.
    ///
    /// Returns `false` (and writes nothing) if no row with `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &NewMovie) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE movies SET title = $2, description = $3, release_date = $4, rating = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_date)
        .bind(input.rating)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            tracing::debug!(movie_id = id, "Movie update matched no row, rolled back");
            return Ok(false);
        }

        sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id)
             SELECT $1, UNNEST($2::BIGINT[])",
        )
        .bind(id)
        .bind(&input.actor_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(movie_id = id, cast = input.actor_ids.len(), "Movie replaced");
        Ok(true)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Link an actor to a movie. Returns `false` if the link already existed.
    pub async fn add_actor(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id)
             VALUES ($1, $2)
             ON CONFLICT (movie_id, actor_id) DO NOTHING",
        )
        .bind(movie_id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlink an actor from a movie. Returns `true` if a link was removed.
    pub async fn remove_actor(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1 AND actor_id = $2")
            .bind(movie_id)
            .bind(actor_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn has_actor(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM movie_actors WHERE movie_id = $1 AND actor_id = $2)",
        )
        .bind(movie_id)
        .bind(actor_id)
        .fetch_one(pool)
        .await
    }
}
