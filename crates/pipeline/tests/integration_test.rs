//! Integration tests for the pipeline.
//!
//! These tests load a dataset from CSV and run full queries against it, the
//! same way the CLI does.

use data_loader::{Dataset, MovieRecord};
use pipeline::filters::*;
use pipeline::{full_view, sort_top_rated, MovieQuery, Recommendations, View};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tempfile::TempDir;

const MOVIES: &str = "title,overview,genres,cast,directors,rating,release_date,poster_url\n\
    Inception,Dream heist,\"Action, Sci-Fi\",\"Leonardo DiCaprio, Elliot Page\",Christopher Nolan,8.8,2010-07-16,http://img/inception.jpg\n\
    Titanic,Ship meets iceberg,\"Romance, Drama\",\"Leonardo DiCaprio, Kate Winslet\",James Cameron,7.9,1997-12-19,http://img/titanic.jpg\n";

fn load(movies: &str, ratings: Option<&str>) -> (TempDir, Dataset) {
    let dir = TempDir::new().unwrap();
    let main_path = dir.path().join("movies_complete.csv");
    let side_path = dir.path().join("movies.csv");
    fs::write(&main_path, movies).unwrap();
    if let Some(ratings) = ratings {
        fs::write(&side_path, ratings).unwrap();
    }
    let loaded = Dataset::load(&main_path, &side_path).unwrap();
    (dir, loaded.dataset)
}

fn titles(view: &View<'_>) -> Vec<String> {
    view.iter().map(|m| m.title.clone()).collect()
}

#[test]
fn test_genre_selection_end_to_end() {
    let (_dir, dataset) = load(MOVIES, None);
    let mut rng = StdRng::seed_from_u64(0);

    let view = MovieQuery::new().with_genres(["Action"]).run(&dataset, &mut rng);

    assert_eq!(titles(&view), vec!["Inception"]);
}

#[test]
fn test_director_search_end_to_end() {
    let (_dir, dataset) = load(MOVIES, None);
    let mut rng = StdRng::seed_from_u64(0);

    let view = MovieQuery::new().with_search("nolan").run(&dataset, &mut rng);

    assert_eq!(titles(&view), vec!["Inception"]);
    assert!(view[0].directors.contains("Christopher Nolan"));
}

#[test]
fn test_top_rated_end_to_end() {
    let movies = "title,genres,rating\nTitanic,\"Romance, Drama\",7.9\nInception,\"Action, Sci-Fi\",8.8\n";
    let (_dir, dataset) = load(movies, None);
    let mut rng = StdRng::seed_from_u64(0);

    let view = MovieQuery::new().with_top_rated(true).run(&dataset, &mut rng);

    assert_eq!(titles(&view), vec!["Inception", "Titanic"]);
}

#[test]
fn test_age_rating_query_uses_joined_side_table() {
    let (_dir, dataset) = load(MOVIES, Some("title,age_rating\nInception,PG-13\n"));
    let mut rng = StdRng::seed_from_u64(0);

    let pg13 = MovieQuery::new().with_age_rating("PG-13").run(&dataset, &mut rng);
    assert_eq!(titles(&pg13), vec!["Inception"]);

    let all = MovieQuery::new().with_age_rating("All").run(&dataset, &mut rng);
    assert_eq!(all.len(), 2);
}

#[test]
fn test_filters_compose_with_search() {
    let (_dir, dataset) = load(MOVIES, None);
    let mut rng = StdRng::seed_from_u64(0);

    let recommendations = MovieQuery::new()
        .with_genres(["Drama"])
        .with_search("dicaprio")
        .recommend(&dataset, &mut rng);

    let Recommendations::Found(cards) = recommendations else {
        panic!("expected results");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Titanic");
    assert_eq!(cards[0].rating, "7.9");
    assert_eq!(cards[0].release_date, "1997-12-19");
    assert_eq!(cards[0].genres, vec!["Romance", "Drama"]);
}

#[test]
fn test_no_op_laws() {
    let (_dir, dataset) = load(MOVIES, Some("title,age_rating\nTitanic,PG-13\n"));
    let view = full_view(&dataset);

    assert_eq!(filter_by_genres::<String>(view.clone(), &[]), view);
    assert_eq!(search(view.clone(), ""), view);
    assert_eq!(filter_by_age_rating(view.clone(), ALL_AGE_RATINGS), view);
}

#[test]
fn test_large_catalogue_is_capped_unless_sampling() {
    let records: Vec<MovieRecord> = (0..40)
        .map(|i| {
            let mut movie = MovieRecord::new(format!("Feature {i}"));
            movie.genres = "Comedy".to_string();
            movie.rating = (i % 10) as f64;
            movie
        })
        .collect();
    let dataset = Dataset::from(records);
    let mut rng = StdRng::seed_from_u64(42);

    let capped = MovieQuery::new()
        .with_genres(["Comedy"])
        .with_top_rated(true)
        .run(&dataset, &mut rng);
    assert_eq!(capped.len(), 10);
    assert_eq!(capped[0].title, "Feature 9");
    assert!(capped.iter().all(|m| m.rating >= 7.0));

    let sampled = MovieQuery::new().with_surprise_me(true).run(&dataset, &mut rng);
    assert_eq!(sampled.len(), 5);

    let sorted = sort_top_rated(full_view(&dataset));
    assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));
}
