//! Core domain types for the movie catalogue.
//!
//! - `MovieRecord` is one normalized row of the main table
//! - `Dataset` owns every record and is never mutated after load
//! - `LoadedDataset` pairs a dataset with the warnings raised while loading it

use crate::error::LoadWarning;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Constants
// =============================================================================

/// Release date given to rows whose date could not be parsed.
///
/// It is the oldest date in any real catalogue, so undated movies sort last
/// under "most recent".
pub const SENTINEL_RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid sentinel release date"),
};

/// Separator between tags in the `genres`, `cast` and `directors` columns
pub const TAG_SEPARATOR: &str = ", ";

// =============================================================================
// MovieRecord
// =============================================================================

/// One movie, normalized at load time.
///
/// Every text field is present (empty when the source cell was blank), the
/// rating is always a number and the release date is always a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub overview: String,
    /// Raw comma-joined genre list, e.g. "Action, Sci-Fi"
    pub genres: String,
    pub cast: String,
    pub directors: String,
    pub rating: f64,
    pub release_date: NaiveDate,
    pub poster_url: String,
    /// Set only when the side table had a row with this exact title
    pub age_rating: Option<String>,
}

impl MovieRecord {
    /// Create a record with the given title and every other field defaulted.
    ///
    /// Handy for building fixtures; the loader fills fields from CSV columns.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: String::new(),
            genres: String::new(),
            cast: String::new(),
            directors: String::new(),
            rating: 0.0,
            release_date: SENTINEL_RELEASE_DATE,
            poster_url: String::new(),
            age_rating: None,
        }
    }

    /// Split the genre text into discrete tags, dropping empty ones
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genres
            .split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// False when the release date is the load-time placeholder
    pub fn has_release_date(&self) -> bool {
        self.release_date != SENTINEL_RELEASE_DATE
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// The full movie catalogue in load order.
///
/// Records are only reachable through shared references, so filters can
/// never change what another step sees.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// All records, in the order they were loaded
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if at least one record received an age rating from the side table
    pub fn has_age_ratings(&self) -> bool {
        self.records.iter().any(|r| r.age_rating.is_some())
    }

    /// Sorted, de-duplicated genre tags across the catalogue.
    ///
    /// This is the list a genre picker offers.
    pub fn genres(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.genre_tags())
            .collect();
        unique.into_iter().map(str::to_string).collect()
    }

    /// Sorted, de-duplicated age ratings. Empty when no side table was joined.
    pub fn age_ratings(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.age_rating.as_deref())
            .collect();
        unique.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<MovieRecord>> for Dataset {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self::new(records)
    }
}

/// Result of a successful load: the dataset plus any non-fatal warnings
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub warnings: Vec<LoadWarning>,
}
