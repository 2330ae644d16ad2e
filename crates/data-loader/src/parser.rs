//! Parsers for the two CSV files behind the catalogue.
//!
//! - main table: title, overview, genres, cast, directors, rating,
//!   release_date, poster_url
//! - side table: title, age_rating
//!
//! Cells are normalized here so the rest of the system never sees a blank
//! rating or an unparsable date.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Column that must exist in the main table
const TITLE_COLUMN: &str = "title";
/// Column the side table contributes to each record
const AGE_RATING_COLUMN: &str = "age_rating";

/// Date layouts accepted for `release_date`, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One row of the main table as it appears on disk.
///
/// Every column is optional: csv yields `None` for blank cells and
/// `#[serde(default)]` covers columns missing from the header.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMovieRow {
    title: Option<String>,
    overview: Option<String>,
    genres: Option<String>,
    cast: Option<String>,
    directors: Option<String>,
    rating: Option<String>,
    release_date: Option<String>,
    poster_url: Option<String>,
}

impl From<RawMovieRow> for MovieRecord {
    fn from(row: RawMovieRow) -> Self {
        MovieRecord {
            title: row.title.unwrap_or_default(),
            overview: row.overview.unwrap_or_default(),
            genres: row.genres.unwrap_or_default(),
            cast: row.cast.unwrap_or_default(),
            directors: row.directors.unwrap_or_default(),
            rating: parse_rating(row.rating.as_deref()),
            release_date: parse_release_date(row.release_date.as_deref()),
            poster_url: row.poster_url.unwrap_or_default(),
            age_rating: None,
        }
    }
}

/// Outcome of reading the age-rating side table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideTable {
    /// The file does not exist
    Missing,
    /// The file exists but lacks these required columns
    Malformed(Vec<String>),
    /// The file exists but could not be read; holds the reason
    Unreadable(String),
    /// Age rating per title
    Ratings(HashMap<String, String>),
}

/// Open a CSV file whose rows may be shorter or longer than the header.
///
/// Missing trailing cells read as absent, extra cells are ignored.
fn open_reader(path: &Path) -> csv::Result<csv::Reader<File>> {
    csv::ReaderBuilder::new().flexible(true).from_path(path)
}

/// Parse the main movie table
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let mut reader = open_reader(path)?;

    let headers = reader.headers()?;
    if !headers.iter().any(|h| h == TITLE_COLUMN) {
        return Err(DataLoadError::MissingColumn {
            file: path.display().to_string(),
            column: TITLE_COLUMN.to_string(),
        });
    }

    let mut movies = Vec::new();
    for row in reader.deserialize::<RawMovieRow>() {
        movies.push(MovieRecord::from(row?));
    }

    debug!("Parsed {} rows from {}", movies.len(), path.display());
    Ok(movies)
}

/// Parse the optional side table mapping titles to age ratings.
///
/// Never fails: a missing, malformed or unreadable file is reported through
/// the returned [`SideTable`] so the load can go on without age ratings.
/// Only the first row for a title is kept, so the join never duplicates a
/// movie. Rows with a blank age rating are skipped.
pub fn parse_age_ratings(path: &Path) -> SideTable {
    if !path.exists() {
        return SideTable::Missing;
    }
    read_age_ratings(path).unwrap_or_else(|err| SideTable::Unreadable(err.to_string()))
}

fn read_age_ratings(path: &Path) -> csv::Result<SideTable> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers()?.clone();

    let title_idx = headers.iter().position(|h| h == TITLE_COLUMN);
    let rating_idx = headers.iter().position(|h| h == AGE_RATING_COLUMN);
    let (title_idx, rating_idx) = match (title_idx, rating_idx) {
        (Some(t), Some(r)) => (t, r),
        (t, r) => {
            let missing = [(TITLE_COLUMN, t), (AGE_RATING_COLUMN, r)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Ok(SideTable::Malformed(missing));
        }
    };

    let mut ratings = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let (Some(title), Some(age_rating)) = (record.get(title_idx), record.get(rating_idx))
        else {
            continue;
        };
        if age_rating.is_empty() {
            continue;
        }
        ratings
            .entry(title.to_string())
            .or_insert_with(|| age_rating.to_string());
    }

    debug!("Parsed {} age ratings from {}", ratings.len(), path.display());
    Ok(SideTable::Ratings(ratings))
}

/// Parse a rating cell. Blank, non-numeric and NaN values become 0.
pub fn parse_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|r| !r.is_nan())
        .unwrap_or(0.0)
}

/// Parse a release date cell, falling back to [`SENTINEL_RELEASE_DATE`].
///
/// Accepts plain dates, date-times (time is dropped), RFC 3339 timestamps
/// and a bare year, which maps to January 1st.
pub fn parse_release_date(raw: Option<&str>) -> NaiveDate {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(try_parse_date)
        .unwrap_or(SENTINEL_RELEASE_DATE)
}

fn try_parse_date(s: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }
    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.date_naive());
    }
    if s.len() == 4 {
        let year = s.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}
