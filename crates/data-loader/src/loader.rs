//! Dataset loading and the age-rating join.
//!
//! Steps:
//! 1. Check the main table exists (fatal if not)
//! 2. Parse the main table and the side table in parallel
//! 3. Left-join age ratings onto the movies by exact title
//! 4. Collect side-table problems as warnings

use crate::error::{DataLoadError, LoadWarning, Result};
use crate::parser::{self, SideTable};
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

impl Dataset {
    /// Load the catalogue from the main table and the optional side table.
    ///
    /// Only a missing or unreadable main table is an error. Side-table
    /// problems are returned in [`LoadedDataset::warnings`] and the dataset
    /// comes back without age ratings.
    pub fn load(main_path: &Path, side_path: &Path) -> Result<LoadedDataset> {
        info!("Loading movie dataset from {}", main_path.display());

        if !main_path.exists() {
            return Err(DataLoadError::DatasetMissing {
                path: main_path.to_path_buf(),
            });
        }

        let (movies, side_table) = rayon::join(
            || parser::parse_movies(main_path),
            || parser::parse_age_ratings(side_path),
        );
        let mut movies = movies?;

        let mut warnings = Vec::new();
        match side_table {
            SideTable::Ratings(ratings) => {
                let matched = join_age_ratings(&mut movies, &ratings);
                info!("Joined age ratings for {}/{} movies", matched, movies.len());
            }
            SideTable::Missing => warnings.push(LoadWarning::SideTableMissing {
                path: side_path.to_path_buf(),
            }),
            SideTable::Malformed(missing) => warnings.push(LoadWarning::SideTableMalformed {
                path: side_path.to_path_buf(),
                missing,
            }),
            SideTable::Unreadable(reason) => warnings.push(LoadWarning::SideTableUnreadable {
                path: side_path.to_path_buf(),
                reason,
            }),
        }

        // The caller shows warnings to the user
        for warning in &warnings {
            debug!("{}", warning);
        }

        let dataset = Dataset::new(movies);
        info!(
            "Loaded {} movies ({} genres, {} age ratings)",
            dataset.len(),
            dataset.genres().len(),
            dataset.age_ratings().len()
        );

        Ok(LoadedDataset { dataset, warnings })
    }
}

/// Left join: every movie is kept, matched ones get their age rating.
///
/// Returns the number of movies that matched. Runs before the dataset is
/// frozen, which is the only time records are written.
fn join_age_ratings(movies: &mut [MovieRecord], ratings: &HashMap<String, String>) -> usize {
    let mut matched = 0;
    for movie in movies.iter_mut() {
        movie.age_rating = ratings.get(&movie.title).cloned();
        if movie.age_rating.is_some() {
            matched += 1;
        }
    }
    matched
}
