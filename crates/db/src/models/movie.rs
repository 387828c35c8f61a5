//! Movie rows. The cast is loaded separately as [`CastRow`](super::actor::CastRow)s.

use chrono::NaiveDate;
use cinema_core::actor::Actor;
use cinema_core::movie::Movie;
use cinema_core::types::DbId;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
}

impl MovieRow {
    pub fn into_movie(self, actors: Vec<Actor>) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            rating: self.rating,
            actors,
        }
    }
}
