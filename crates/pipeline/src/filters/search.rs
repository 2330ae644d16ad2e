//! Free-text search over title, cast and directors.

use crate::traits::{Filter, View};

/// Keeps records where the query appears in the title, cast or directors.
///
/// Matching is a case-insensitive substring test. An empty query keeps
/// everything.
pub struct SearchFilter {
    /// Lowercased once up front
    query: String,
}

impl SearchFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: query.as_ref().to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, view: View<'a>) -> View<'a> {
        if self.query.is_empty() {
            return view;
        }
        view.into_iter()
            .filter(|movie| {
                [&movie.title, &movie.cast, &movie.directors]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&self.query))
            })
            .collect()
    }
}

/// Case-insensitive search; no-op when `query` is empty
pub fn search<'a>(view: View<'a>, query: &str) -> View<'a> {
    SearchFilter::new(query).apply(view)
}
