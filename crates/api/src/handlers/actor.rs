//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use cinema_core::actor::{Actor, ActorInput, Gender};
use cinema_core::movie::Movie;
use cinema_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// Not an ISO 5218 code; unknown labels map here and fail validation.
const UNRECOGNIZED_GENDER: i16 = -1;

/// Request body for creating or updating an actor.
///
/// `gender` is a label: `unknown`, `male`, `female` or `not applicable`.
/// On update, empty fields keep the stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActorRequest {
    pub name: String,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
}

fn gender_code(label: &str) -> i16 {
    Gender::from_label(label).map_or(UNRECOGNIZED_GENDER, Gender::code)
}

/// POST /api/v1/actors
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<ActorRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Actor>>)> {
    let actor = state
        .actors
        .add_actor(&ActorInput {
            gender: gender_code(&input.gender),
            name: input.name,
            birth_date: input.birth_date,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: actor })))
}

/// GET /api/v1/actors
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Actor>>>> {
    let actors = state.actors.list_actors().await?;
    Ok(Json(DataResponse { data: actors }))
}

/// GET /api/v1/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Actor>>> {
    let actor = state.actors.get_actor_by_id(id).await?;
    Ok(Json(DataResponse { data: actor }))
}

/// PUT|PATCH /api/v1/actors/{id}
///
/// Merges non-empty request fields onto the stored actor, then replaces it.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ActorRequest>,
) -> AppResult<Json<DataResponse<Actor>>> {
    let current = state.actors.get_actor_by_id(id).await?;

    let mut merged = ActorInput::from_actor(&current);
    if !input.name.is_empty() {
        merged.name = input.name;
    }
    if !input.gender.is_empty() {
        merged.gender = gender_code(&input.gender);
    }
    if input.birth_date.is_some() {
        merged.birth_date = input.birth_date;
    }

    let actor = state.actors.update_actor(id, &merged).await?;
    Ok(Json(DataResponse { data: actor }))
}

/// DELETE /api/v1/actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.actors.delete_actor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/actors/{id}/movies
pub async fn list_movies(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = state.actors.list_movies_by_actor(id).await?;
    Ok(Json(DataResponse { data: movies }))
}
