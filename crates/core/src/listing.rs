//! Movie listing engine: optional-field filtering and multi-mode sorting.
//!
//! Both stages work on in-memory collections. Filtering is a single stable
//! pass; sorting is a stable sort with one comparator per [`MovieSort`].

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::movie::Movie;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Listing filter. Every `None` field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title or of any cast member's name.
    pub title: Option<String>,
    /// Inclusive lower bound on the release date.
    pub released_since: Option<NaiveDate>,
    /// Inclusive lower bound on the rating.
    pub min_rating: Option<f64>,
}

impl MovieFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_released_since(mut self, date: NaiveDate) -> Self {
        self.released_since = Some(date);
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.released_since.is_none() && self.min_rating.is_none()
    }

    fn matches(&self, movie: &Movie, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let in_title = movie.title.to_lowercase().contains(needle);
            let in_cast = movie
                .actors
                .iter()
                .any(|a| a.name.to_lowercase().contains(needle));
            if !in_title && !in_cast {
                return false;
            }
        }
        if let Some(since) = self.released_since {
            if movie.release_date < since {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if movie.rating < min {
                return false;
            }
        }
        true
    }
}

/// Keep the movies matching `filter`, preserving their relative order.
///
/// `None` returns the input unchanged.
pub fn filter_movies(movies: Vec<Movie>, filter: Option<&MovieFilter>) -> Vec<Movie> {
    let Some(filter) = filter else {
        return movies;
    };
    let needle = filter.title.as_deref().map(str::to_lowercase);

    movies
        .into_iter()
        .filter(|m| filter.matches(m, needle.as_deref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovieSort {
    /// Highest rating first.
    #[default]
    Rating,
    /// Newest release first.
    ReleaseDate,
    /// Title, ascending.
    Title,
}

impl MovieSort {
    /// Parse the `sort` query value. Unknown or absent values use the default.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("release_date") => MovieSort::ReleaseDate,
            Some("title") => MovieSort::Title,
            _ => MovieSort::Rating,
        }
    }

    fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            MovieSort::Rating => b.rating.total_cmp(&a.rating),
            MovieSort::ReleaseDate => b.release_date.cmp(&a.release_date),
            MovieSort::Title => a.title.cmp(&b.title),
        }
    }
}

/// Stable sort; ties keep their input order.
pub fn sort_movies(movies: &mut [Movie], sort: MovieSort) {
    movies.sort_by(|a, b| sort.compare(a, b));
}
