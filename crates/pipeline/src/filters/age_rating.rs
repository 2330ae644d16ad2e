//! Filter to keep movies with one exact age rating.

use crate::traits::{Filter, View};

/// Label that selects every age rating
pub const ALL_AGE_RATINGS: &str = "All";

/// Which age rating the user picked
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AgeRatingSelection {
    #[default]
    All,
    Only(String),
}

impl From<&str> for AgeRatingSelection {
    fn from(value: &str) -> Self {
        if value == ALL_AGE_RATINGS {
            AgeRatingSelection::All
        } else {
            AgeRatingSelection::Only(value.to_string())
        }
    }
}

impl From<String> for AgeRatingSelection {
    fn from(value: String) -> Self {
        if value == ALL_AGE_RATINGS {
            AgeRatingSelection::All
        } else {
            AgeRatingSelection::Only(value)
        }
    }
}

/// Keeps records whose age rating equals the selection exactly.
///
/// Comparison is case-sensitive. Records without an age rating never match a
/// specific selection.
pub struct AgeRatingFilter {
    selection: AgeRatingSelection,
}

impl AgeRatingFilter {
    pub fn new(selection: impl Into<AgeRatingSelection>) -> Self {
        Self {
            selection: selection.into(),
        }
    }
}

impl Filter for AgeRatingFilter {
    fn name(&self) -> &str {
        "AgeRatingFilter"
    }

    fn apply<'a>(&self, view: View<'a>) -> View<'a> {
        let AgeRatingSelection::Only(wanted) = &self.selection else {
            return view;
        };
        view.into_iter()
            .filter(|movie| movie.age_rating.as_deref() == Some(wanted.as_str()))
            .collect()
    }
}

/// Keep records rated exactly `rating`; no-op for "All"
pub fn filter_by_age_rating<'a>(view: View<'a>, rating: &str) -> View<'a> {
    AgeRatingFilter::new(rating).apply(view)
}
