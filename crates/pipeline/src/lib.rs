//! Filtering, ranking and card formatting for the movie catalogue.
//!
//! This crate provides:
//! - Filter trait and implementations (genre, age rating, search)
//! - FilterPipeline for composing filters
//! - Ranking and sampling of filtered views
//! - MovieQuery, which runs one "show results" request end to end
//! - MovieCard, the display unit handed to a renderer
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::MovieQuery;
//!
//! let recommendations = MovieQuery::new()
//!     .with_genres(["Action"])
//!     .with_search("nolan")
//!     .with_top_rated(true)
//!     .recommend(&dataset, &mut rand::rng());
//!
//! for card in recommendations.cards() {
//!     println!("{} ({})", card.title, card.rating);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod card;
pub mod query;

// Re-export main types
pub use traits::{full_view, Filter, View};
pub use filter_pipeline::FilterPipeline;
pub use ranking::{sort_most_recent, sort_top_rated, surprise_sample, truncate};
pub use card::{MovieCard, Recommendations, NO_RESULTS_MESSAGE, RESULTS_HEADING};
pub use query::{MovieQuery, QueryOptions};
