//! Ordering, sampling and truncation of a filtered view.
//!
//! These run after the filters. Sorts are stable, so records that tie keep
//! the order the filters produced.

use crate::traits::View;
use rand::Rng;
use std::cmp::Ordering;

/// Number of records "Surprise Me" draws unless told otherwise
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Number of records shown when no sample was drawn
pub const DEFAULT_LIMIT: usize = 10;

/// Stable sort, highest rating first
pub fn sort_top_rated(mut view: View<'_>) -> View<'_> {
    view.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    view
}

/// Stable sort, newest release first. Undated records end up last.
pub fn sort_most_recent(mut view: View<'_>) -> View<'_> {
    view.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    view
}

/// Draw `min(view.len(), count)` distinct records in random order.
pub fn surprise_sample<'a, R: Rng + ?Sized>(view: View<'a>, count: usize, rng: &mut R) -> View<'a> {
    let amount = view.len().min(count);
    rand::seq::index::sample(rng, view.len(), amount)
        .into_iter()
        .map(|idx| view[idx])
        .collect()
}

/// Keep only the first `limit` records
pub fn truncate(mut view: View<'_>, limit: usize) -> View<'_> {
    view.truncate(limit);
    view
}
