//! Actor rows.

use chrono::NaiveDate;
use cinema_core::actor::{Actor, Gender};
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActorRow {
    pub id: DbId,
    pub name: String,
    pub gender: i16,
    pub birth_date: NaiveDate,
}

/// An actor joined through `movie_actors`, tagged with the movie it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct CastRow {
    pub movie_id: DbId,
    pub id: DbId,
    pub name: String,
    pub gender: i16,
    pub birth_date: NaiveDate,
}

impl TryFrom<ActorRow> for Actor {
    type Error = CoreError;

    fn try_from(row: ActorRow) -> Result<Self, Self::Error> {
        Ok(Actor {
            id: row.id,
            name: row.name,
            gender: Gender::from_code(row.gender)?,
            birth_date: row.birth_date,
        })
    }
}

impl TryFrom<CastRow> for Actor {
    type Error = CoreError;

    fn try_from(row: CastRow) -> Result<Self, Self::Error> {
        Ok(Actor {
            id: row.id,
            name: row.name,
            gender: Gender::from_code(row.gender)?,
            birth_date: row.birth_date,
        })
    }
}
