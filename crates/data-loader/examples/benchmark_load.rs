use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let loaded = Dataset::load(
        &data_dir.join("movies_complete.csv"),
        &data_dir.join("movies.csv"),
    )
    .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    for warning in &loaded.warnings {
        println!("warning: {}", warning);
    }

    let dataset = &loaded.dataset;
    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    println!("Genres: {}", dataset.genres().len());
    println!("Age ratings: {}", dataset.age_ratings().len());
    println!("\nPerformance: {:.0} movies/second",
             dataset.len() as f64 / elapsed.as_secs_f64());
}
