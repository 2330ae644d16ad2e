//! Display units handed to the rendering layer.
//!
//! A `MovieCard` holds every value a card shows, already formatted. How it
//! is drawn (terminal, HTML, JSON) is up to the caller.

use crate::traits::View;
use data_loader::MovieRecord;
use serde::Serialize;

/// Heading shown above a non-empty result list
pub const RESULTS_HEADING: &str = "Movie Recommendations";

/// Message shown when nothing survived the filters
pub const NO_RESULTS_MESSAGE: &str = "No movies match your filters. Try adjusting your options.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieCard {
    pub title: String,
    pub poster_url: String,
    /// One decimal place, e.g. "8.8"
    pub rating: String,
    /// `YYYY-MM-DD`
    pub release_date: String,
    pub genres: Vec<String>,
    pub cast: String,
    pub directors: String,
    pub overview: String,
}

impl From<&MovieRecord> for MovieCard {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title.clone(),
            poster_url: movie.poster_url.clone(),
            rating: format!("{:.1}", movie.rating),
            release_date: movie.release_date.format("%Y-%m-%d").to_string(),
            genres: movie.genre_tags().map(str::to_string).collect(),
            cast: movie.cast.clone(),
            directors: movie.directors.clone(),
            overview: movie.overview.clone(),
        }
    }
}

/// What the rendering layer receives for one "show results" request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "cards", rename_all = "snake_case")]
pub enum Recommendations {
    Found(Vec<MovieCard>),
    NoResults,
}

impl Recommendations {
    /// Format every record in the view, or signal that there is nothing to show
    pub fn from_view(view: &View<'_>) -> Self {
        if view.is_empty() {
            Recommendations::NoResults
        } else {
            Recommendations::Found(view.iter().map(|movie| MovieCard::from(*movie)).collect())
        }
    }

    pub fn cards(&self) -> &[MovieCard] {
        match self {
            Recommendations::Found(cards) => cards,
            Recommendations::NoResults => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Recommendations::NoResults)
    }
}
