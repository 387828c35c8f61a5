//! Handlers for the `/movies` resource and its cast.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use cinema_core::actor::Actor;
use cinema_core::listing::{MovieFilter, MovieSort};
use cinema_core::movie::{Movie, MovieInput};
use cinema_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /movies`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateMovieRequest {
    pub title: String,
    pub description: String,
    pub release_date: Option<NaiveDate>,
    pub rating: f64,
    /// Initial cast, as actor ids.
    pub actors: Vec<DbId>,
}

/// Request body for `PUT|PATCH /movies/{id}`. Absent or empty fields keep
/// the stored value; `actors`, when present, replaces the whole cast.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub actors: Option<Vec<DbId>>,
}

/// Request body for `POST /movies/{id}/actors`.
#[derive(Debug, Deserialize)]
pub struct AddActorRequest {
    pub actor_id: DbId,
}

/// Query parameters for `GET /movies`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListMoviesQuery {
    /// `rating` (default), `release_date` or `title`.
    pub sort: Option<String>,
    /// Substring of the title or of a cast member's name.
    pub title: Option<String>,
    /// Earliest release date, `YYYY-MM-DD`.
    #[serde(alias = "release_date")]
    pub released_since: Option<NaiveDate>,
    /// Lowest rating.
    #[serde(alias = "rating")]
    pub min_rating: Option<f64>,
}

impl ListMoviesQuery {
    fn filter(&self) -> AppResult<Option<MovieFilter>> {
        let mut filter = MovieFilter::new();
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            filter = filter.with_title(title);
        }
        if let Some(date) = self.released_since {
            filter = filter.with_released_since(date);
        }
        if let Some(rating) = self.min_rating {
            if rating.is_nan() {
                return Err(AppError::BadRequest("min_rating must be a number".into()));
            }
            filter = filter.with_min_rating(rating);
        }
        Ok((!filter.is_empty()).then_some(filter))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    let movie = state
        .movies
        .add_movie(&MovieInput {
            title: input.title,
            description: input.description,
            release_date: input.release_date,
            rating: input.rating,
            actor_ids: input.actors,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<ListMoviesQuery>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let filter = query.filter()?;
    let sort = MovieSort::from_query(query.sort.as_deref());

    let movies = state.movies.list_movies(filter.as_ref(), sort).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = state.movies.get_movie_by_id(id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// PUT|PATCH /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovieRequest>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let current = state.movies.get_movie_by_id(id).await?;

    let mut merged = MovieInput::from_movie(&current);
    if let Some(title) = input.title.filter(|t| !t.is_empty()) {
        merged.title = title;
    }
    if let Some(description) = input.description.filter(|d| !d.is_empty()) {
        merged.description = description;
    }
    if input.release_date.is_some() {
        merged.release_date = input.release_date;
    }
    if let Some(rating) = input.rating {
        merged.rating = rating;
    }
    if let Some(actors) = input.actors {
        merged.actor_ids = actors;
    }

    let movie = state.movies.update_movie(id, &merged).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.movies.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/movies/{id}/actors
pub async fn list_actors(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Actor>>>> {
    let actors = state.movies.get_actors_by_movie_id(id).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// POST /api/v1/movies/{id}/actors
pub async fn add_actor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AddActorRequest>,
) -> AppResult<StatusCode> {
    state.movies.add_actor_to_movie(input.actor_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movies/{id}/actors/{actor_id}
pub async fn remove_actor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((id, actor_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    state.movies.remove_actor_from_movie(actor_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
