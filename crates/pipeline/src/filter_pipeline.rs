//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::{Filter, View};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(["Action"]))
///     .add_filter(AgeRatingFilter::new("PG-13"))
///     .add_filter(SearchFilter::new("nolan"));
///
/// let filtered = pipeline.apply(full_view(&dataset));
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the view.
    ///
    /// Each filter sees the output of the one before it. An empty pipeline
    /// returns the view unchanged.
    pub fn apply<'a>(&self, view: View<'a>) -> View<'a> {
        let mut current = view;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreFilter, SearchFilter};
    use crate::traits::full_view;
    use data_loader::{Dataset, MovieRecord};

    fn dataset() -> Dataset {
        let mut heat = MovieRecord::new("Heat");
        heat.genres = "Crime, Thriller".to_string();
        heat.directors = "Michael Mann".to_string();

        let mut collateral = MovieRecord::new("Collateral");
        collateral.genres = "Crime".to_string();
        collateral.directors = "Michael Mann".to_string();

        let mut up = MovieRecord::new("Up");
        up.genres = "Animation".to_string();

        Dataset::from(vec![heat, collateral, up])
    }

    #[test]
    fn test_empty_pipeline() {
        let dataset = dataset();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(full_view(&dataset));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_run_in_order() {
        let dataset = dataset();
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new(["Crime"]))
            .add_filter(SearchFilter::new("heat"));

        assert_eq!(pipeline.filter_names(), vec!["GenreFilter", "SearchFilter"]);

        let filtered = pipeline.apply(full_view(&dataset));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Heat");
    }
}
