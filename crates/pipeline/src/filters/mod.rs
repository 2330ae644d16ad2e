//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod age_rating;
pub mod genre;
pub mod search;

// Re-export for convenience
pub use age_rating::{filter_by_age_rating, AgeRatingFilter, AgeRatingSelection, ALL_AGE_RATINGS};
pub use genre::{filter_by_genres, GenreFilter};
pub use search::{search, SearchFilter};
