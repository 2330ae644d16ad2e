//! Filter to keep movies in any of the selected genres.

use crate::traits::{Filter, View};

/// Keeps records whose genre text contains at least one selected genre.
///
/// ## Algorithm
/// The match is a literal substring test against the raw comma-joined genre
/// text, not a per-tag comparison. "Action" therefore also matches
/// "Live Action".
pub struct GenreFilter {
    genres: Vec<String>,
}

impl GenreFilter {
    /// Create a new GenreFilter. An empty selection keeps everything.
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, view: View<'a>) -> View<'a> {
        if self.genres.is_empty() {
            return view;
        }
        view.into_iter()
            .filter(|movie| {
                self.genres
                    .iter()
                    .any(|genre| movie.genres.contains(genre.as_str()))
            })
            .collect()
    }
}

/// Keep records matching any of `genres`; no-op when `genres` is empty
pub fn filter_by_genres<'a, S: AsRef<str>>(view: View<'a>, genres: &[S]) -> View<'a> {
    GenreFilter::new(genres.iter().map(|g| g.as_ref().to_string())).apply(view)
}
