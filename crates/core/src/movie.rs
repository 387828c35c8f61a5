//! Movie entity and movie field validation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::actor::Actor;
use crate::error::CoreError;
use crate::types::DbId;

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// A persisted movie together with its cast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub actors: Vec<Actor>,
}

/// Unvalidated movie fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieInput {
    pub title: String,
    pub description: String,
    pub release_date: Option<NaiveDate>,
    pub rating: f64,
    pub actor_ids: Vec<DbId>,
}

impl MovieInput {
    /// Start an input from an existing movie, for partial updates.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            description: movie.description.clone(),
            release_date: Some(movie.release_date),
            rating: movie.rating,
            actor_ids: movie.actors.iter().map(|a| a.id).collect(),
        }
    }
}

/// Movie fields that passed validation and are ready to persist.
///
/// `actor_ids` holds each actor at most once, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub actor_ids: Vec<DbId>,
}

/// Validate movie fields.
///
/// Checks run in a fixed order: title, description, rating, release date.
/// Lengths are counted in characters, not bytes. NaN is never a valid rating.
pub fn validate_movie(input: &MovieInput) -> Result<NewMovie, CoreError> {
    if input.title.is_empty() {
        return Err(CoreError::EmptyTitle);
    }
    if input.title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::TooLongTitle);
    }
    if input.description.is_empty() {
        return Err(CoreError::EmptyDescription);
    }
    if input.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::TooLongDescription);
    }
    if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
        return Err(CoreError::InvalidRating);
    }
    let release_date = input.release_date.ok_or(CoreError::EmptyReleaseDate)?;

    Ok(NewMovie {
        title: input.title.clone(),
        description: input.description.clone(),
        release_date,
        rating: input.rating,
        actor_ids: dedup_ids(&input.actor_ids),
    })
}

fn dedup_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid() -> MovieInput {
        MovieInput {
            title: "Heat".into(),
            description: "A group of professional bank robbers.".into(),
            release_date: NaiveDate::from_ymd_opt(1995, 12, 15),
            rating: 8.3,
            actor_ids: vec![],
        }
    }

    #[test]
    fn valid_movie_passes() {
        let movie = validate_movie(&valid()).expect("valid input");
        assert_eq!(movie.title, "Heat");
    }

    #[test]
    fn empty_title_rejected() {
        let input = MovieInput {
            title: String::new(),
            ..valid()
        };
        assert_matches!(validate_movie(&input), Err(CoreError::EmptyTitle));
    }

    #[test]
    fn title_at_limit_accepted() {
        let input = MovieInput {
            title: "x".repeat(MAX_TITLE_LEN),
            ..valid()
        };
        assert!(validate_movie(&input).is_ok());
    }

    #[test]
    fn title_over_limit_rejected() {
        let input = MovieInput {
            title: "x".repeat(MAX_TITLE_LEN + 1),
            ..valid()
        };
        assert_matches!(validate_movie(&input), Err(CoreError::TooLongTitle));
    }

    #[test]
    fn title_length_counts_chars_not_bytes() {
        // 100 two-byte characters.
        let input = MovieInput {
            title: "ё".repeat(MAX_TITLE_LEN),
            ..valid()
        };
        assert!(validate_movie(&input).is_ok());
    }

    #[test]
    fn empty_description_rejected() {
        let input = MovieInput {
            description: String::new(),
            ..valid()
        };
        assert_matches!(validate_movie(&input), Err(CoreError::EmptyDescription));
    }

    #[test]
    fn description_at_limit_accepted() {
        let input = MovieInput {
            description: "d".repeat(MAX_DESCRIPTION_LEN),
            ..valid()
        };
        let movie = validate_movie(&input).unwrap();
        assert_eq!(movie.description.chars().count(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn description_over_limit_rejected() {
        let input = MovieInput {
            description: "d".repeat(MAX_DESCRIPTION_LEN + 1),
            ..valid()
        };
        assert_matches!(validate_movie(&input), Err(CoreError::TooLongDescription));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [0.0, 10.0] {
            let input = MovieInput { rating, ..valid() };
            assert!(validate_movie(&input).is_ok(), "rating {rating} must pass");
        }
    }

    #[test]
    fn rating_out_of_range_rejected() {
        for rating in [-0.1, 10.01, f64::NAN, f64::INFINITY] {
            let input = MovieInput { rating, ..valid() };
            assert_matches!(validate_movie(&input), Err(CoreError::InvalidRating));
        }
    }

    #[test]
    fn missing_release_date_rejected() {
        let input = MovieInput {
            release_date: None,
            ..valid()
        };
        assert_matches!(validate_movie(&input), Err(CoreError::EmptyReleaseDate));
    }

    #[test]
    fn check_order_is_fixed() {
        let everything_wrong = MovieInput {
            title: String::new(),
            description: String::new(),
            release_date: None,
            rating: 11.0,
            actor_ids: vec![],
        };
        assert_matches!(validate_movie(&everything_wrong), Err(CoreError::EmptyTitle));

        let bad_rating_and_date = MovieInput {
            rating: -1.0,
            release_date: None,
            ..valid()
        };
        assert_matches!(
            validate_movie(&bad_rating_and_date),
            Err(CoreError::InvalidRating)
        );
    }

    #[test]
    fn duplicate_actor_ids_collapse() {
        let input = MovieInput {
            actor_ids: vec![3, 1, 3, 2, 1],
            ..valid()
        };
        assert_eq!(validate_movie(&input).unwrap().actor_ids, vec![3, 1, 2]);
    }
}
