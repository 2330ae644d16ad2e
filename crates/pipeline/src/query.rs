//! # MovieQuery
//!
//! One "show results" request against the catalogue:
//! 1. Filter by genre, then age rating, then free-text search
//! 2. Sort by rating if "Top Rated" is on
//! 3. Sort by release date if "Most Recent" is on
//! 4. Draw a random sample if "Surprise Me" is on
//! 5. Without a sample, keep the first `limit` records
//!
//! Steps 2-4 run in that fixed order, so when several toggles are on the
//! last one applied decides the final order.

use crate::card::Recommendations;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AgeRatingFilter, AgeRatingSelection, GenreFilter, SearchFilter};
use crate::ranking::{self, DEFAULT_LIMIT, DEFAULT_SAMPLE_SIZE};
use crate::traits::{full_view, View};
use data_loader::Dataset;
use rand::Rng;
use tracing::{debug, instrument};

/// Result-size settings for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Cutoff applied when no sample was drawn
    pub limit: usize,
    /// Records drawn by "Surprise Me"
    pub sample_size: usize,
}

impl QueryOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

/// Everything the user picked before pressing "show results".
///
/// Built with the `with_*` methods; the defaults select everything in load
/// order.
#[derive(Debug, Clone, Default)]
pub struct MovieQuery {
    search: String,
    genres: Vec<String>,
    age_rating: AgeRatingSelection,
    top_rated: bool,
    most_recent: bool,
    surprise_me: bool,
    options: QueryOptions,
}

impl MovieQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over title, cast and directors
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Genres to keep (any match). Empty keeps everything.
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Age rating to keep, or "All"
    pub fn with_age_rating(mut self, age_rating: impl Into<AgeRatingSelection>) -> Self {
        self.age_rating = age_rating.into();
        self
    }

    pub fn with_top_rated(mut self, enabled: bool) -> Self {
        self.top_rated = enabled;
        self
    }

    pub fn with_most_recent(mut self, enabled: bool) -> Self {
        self.most_recent = enabled;
        self
    }

    pub fn with_surprise_me(mut self, enabled: bool) -> Self {
        self.surprise_me = enabled;
        self
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// The filters this query runs, in order
    pub fn filter_pipeline(&self) -> FilterPipeline {
        FilterPipeline::new()
            .add_filter(GenreFilter::new(self.genres.iter().cloned()))
            .add_filter(AgeRatingFilter::new(self.age_rating.clone()))
            .add_filter(SearchFilter::new(&self.search))
    }

    /// Run the query over the whole dataset
    #[instrument(skip(self, dataset, rng), fields(total = dataset.len()))]
    pub fn run<'a, R: Rng + ?Sized>(&self, dataset: &'a Dataset, rng: &mut R) -> View<'a> {
        self.apply(full_view(dataset), rng)
    }

    /// Run the query over an existing view
    pub fn apply<'a, R: Rng + ?Sized>(&self, view: View<'a>, rng: &mut R) -> View<'a> {
        let mut view = self.filter_pipeline().apply(view);

        if self.top_rated {
            view = ranking::sort_top_rated(view);
        }
        if self.most_recent {
            view = ranking::sort_most_recent(view);
        }
        if self.surprise_me {
            view = ranking::surprise_sample(view, self.options.sample_size, rng);
        } else {
            view = ranking::truncate(view, self.options.limit);
        }

        debug!(
            "Query returned {} movies (top_rated={}, most_recent={}, surprise_me={})",
            view.len(),
            self.top_rated,
            self.most_recent,
            self.surprise_me
        );
        view
    }

    /// Run the query and format the result as cards
    pub fn recommend<R: Rng + ?Sized>(&self, dataset: &Dataset, rng: &mut R) -> Recommendations {
        Recommendations::from_view(&self.run(dataset, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn numbered(count: usize) -> Dataset {
        (0..count)
            .map(|i| {
                let mut movie = MovieRecord::new(format!("Movie {i}"));
                movie.rating = (i % 7) as f64;
                movie
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_default_query_truncates_in_load_order() {
        let dataset = numbered(25);
        let mut rng = StdRng::seed_from_u64(0);

        let view = MovieQuery::new().run(&dataset, &mut rng);

        assert_eq!(view.len(), 10);
        assert_eq!(view[0].title, "Movie 0");
        assert_eq!(view[9].title, "Movie 9");
    }

    #[test]
    fn test_surprise_me_bypasses_limit() {
        let dataset = numbered(25);
        let mut rng = StdRng::seed_from_u64(0);

        let view = MovieQuery::new()
            .with_surprise_me(true)
            .with_options(QueryOptions::default().with_limit(2).with_sample_size(8))
            .run(&dataset, &mut rng);

        assert_eq!(view.len(), 8);
    }

    #[test]
    fn test_most_recent_overrides_top_rated() {
        let mut older = MovieRecord::new("Older, higher rated");
        older.rating = 9.0;
        older.release_date = chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let mut newer = MovieRecord::new("Newer, lower rated");
        newer.rating = 6.0;
        newer.release_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let dataset = Dataset::from(vec![older, newer]);
        let mut rng = StdRng::seed_from_u64(0);

        let view = MovieQuery::new()
            .with_top_rated(true)
            .with_most_recent(true)
            .run(&dataset, &mut rng);

        assert_eq!(view[0].title, "Newer, lower rated");
    }

    #[test]
    fn test_recommend_signals_no_results() {
        let dataset = numbered(3);
        let mut rng = StdRng::seed_from_u64(0);

        let recommendations = MovieQuery::new()
            .with_search("does not exist")
            .recommend(&dataset, &mut rng);

        assert_eq!(recommendations, Recommendations::NoResults);
    }
}
