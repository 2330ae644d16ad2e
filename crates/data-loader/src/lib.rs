//! # Data Loader Crate
//!
//! This crate loads the movie catalogue from CSV and normalizes it.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `Dataset`, `LoadedDataset`
//! - **parser**: Parse the main table and the age-rating side table
//! - **loader**: Build the `Dataset`, including the age-rating join
//! - **error**: Fatal errors and non-fatal warnings
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let loaded = Dataset::load(
//!     Path::new("data/movies_complete.csv"),
//!     Path::new("data/movies.csv"),
//! )?;
//!
//! for warning in &loaded.warnings {
//!     eprintln!("{warning}");
//! }
//! println!("{} movies", loaded.dataset.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, LoadWarning, Result};
pub use types::{Dataset, LoadedDataset, MovieRecord, SENTINEL_RELEASE_DATE, TAG_SEPARATOR};
