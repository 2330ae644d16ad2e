//! Core traits for the filtering pipeline.
//!
//! This module defines the `View` a filter operates on and the `Filter`
//! trait that allows composable filters to be chained over it.

use data_loader::{Dataset, MovieRecord};

/// An ordered selection of records borrowed from a [`Dataset`].
///
/// Every step takes a view and returns a new one. The records themselves are
/// shared references, so no step can change what another step sees.
pub type View<'a> = Vec<&'a MovieRecord>;

/// Build the starting view: every record, in load order
pub fn full_view(dataset: &Dataset) -> View<'_> {
    dataset.records().iter().collect()
}

/// Core trait for filtering a view.
///
/// ## Design Note
/// - Filters take ownership of the view and return a filtered view
/// - Filters are total: they never fail on a loaded dataset
/// - A filter with nothing selected returns its input unchanged
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep the records this filter accepts, preserving their order.
    fn apply<'a>(&self, view: View<'a>) -> View<'a>;
}
