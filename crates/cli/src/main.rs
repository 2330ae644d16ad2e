use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Dataset, LoadedDataset};
use pipeline::filters::ALL_AGE_RATINGS;
use pipeline::{
    MovieCard, MovieQuery, QueryOptions, Recommendations, NO_RESULTS_MESSAGE, RESULTS_HEADING,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;

/// Movie Night - browse a movie catalogue from the terminal
#[derive(Parser)]
#[command(name = "movie-night")]
#[command(about = "Your movie night companion: filter, search and shuffle a movie catalogue", long_about = None)]
struct Cli {
    /// Directory holding the CSV files
    #[arg(short, long, env = "MOVIE_NIGHT_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Main movie table, relative to the data directory
    #[arg(long, default_value = "movies_complete.csv")]
    movies_file: PathBuf,

    /// Optional title/age_rating table, relative to the data directory
    #[arg(long, default_value = "movies.csv")]
    ratings_file: PathBuf,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show movies matching the given filters
    Show {
        /// Search titles, cast and directors (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Genre to include; repeat for several (any match)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Exact age rating, or "All"
        #[arg(short, long, default_value = ALL_AGE_RATINGS)]
        age_rating: String,

        /// Sort by rating, highest first
        #[arg(long)]
        top_rated: bool,

        /// Sort by release date, newest first
        #[arg(long)]
        most_recent: bool,

        /// Show a random pick instead of the top of the list
        #[arg(long)]
        surprise_me: bool,

        /// Maximum number of movies shown without --surprise-me
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Number of movies drawn by --surprise-me
        #[arg(long, default_value = "5")]
        sample_size: usize,

        /// Seed for --surprise-me, for repeatable picks
        #[arg(long)]
        seed: Option<u64>,

        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every genre in the catalogue
    Genres,

    /// List every age rating in the catalogue
    AgeRatings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    init_style(cli.no_color);

    let start = Instant::now();
    let loaded = Dataset::load(
        &cli.data_dir.join(&cli.movies_file),
        &cli.data_dir.join(&cli.ratings_file),
    )
    .context("Failed to load movie dataset")?;
    tracing::debug!("Loaded dataset in {:?}", start.elapsed());

    let LoadedDataset { dataset, warnings } = loaded;
    for warning in &warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    match cli.command {
        Commands::Show {
            search,
            genres,
            age_rating,
            top_rated,
            most_recent,
            surprise_me,
            limit,
            sample_size,
            seed,
            json,
        } => {
            let query = MovieQuery::new()
                .with_search(search)
                .with_genres(genres)
                .with_age_rating(resolve_age_rating(&dataset, age_rating))
                .with_top_rated(top_rated)
                .with_most_recent(most_recent)
                .with_surprise_me(surprise_me)
                .with_options(
                    QueryOptions::default()
                        .with_limit(limit)
                        .with_sample_size(sample_size),
                );
            handle_show(&dataset, &query, seed, json)?
        }
        Commands::Genres => print_list("Genres", &dataset.genres()),
        Commands::AgeRatings => print_list("Age ratings", &dataset.age_ratings()),
    }

    Ok(())
}

/// Apply the process-wide output style. Called once, before anything is printed.
fn init_style(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}

/// Without any joined age ratings the only meaningful selection is "All"
fn resolve_age_rating(dataset: &Dataset, requested: String) -> String {
    if requested != ALL_AGE_RATINGS && !dataset.has_age_ratings() {
        tracing::warn!(
            "Ignoring age rating '{}': no age ratings are available",
            requested
        );
        return ALL_AGE_RATINGS.to_string();
    }
    requested
}

/// Handle the 'show' command
fn handle_show(dataset: &Dataset, query: &MovieQuery, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let recommendations = query.recommend(dataset, &mut rng);

    if json {
        let output = serde_json::to_string_pretty(&recommendations)
            .context("Failed to serialize recommendations")?;
        println!("{}", output);
        return Ok(());
    }

    match &recommendations {
        Recommendations::Found(cards) => {
            println!("{}\n", RESULTS_HEADING.bold().blue());
            for (i, card) in cards.iter().enumerate() {
                print_card(i + 1, card);
            }
        }
        Recommendations::NoResults => println!("{}", NO_RESULTS_MESSAGE.yellow()),
    }
    Ok(())
}

/// Print one movie card
fn print_card(rank: usize, card: &MovieCard) {
    let tags = card
        .genres
        .iter()
        .map(|g| format!("[{}]", g).magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    println!("{} {}", format!("{}.", rank).green(), card.title.bold());
    println!("   {}Rating: {}", "• ".cyan(), card.rating);
    println!("   {}Release Date: {}", "• ".cyan(), card.release_date);
    println!("   {}Genres: {}", "• ".cyan(), tags);
    println!("   {}Cast: {}", "• ".cyan(), card.cast);
    println!("   {}Directors: {}", "• ".cyan(), card.directors);
    if !card.poster_url.is_empty() {
        println!("   {}Poster: {}", "• ".cyan(), card.poster_url.dimmed());
    }
    if !card.overview.is_empty() {
        println!("   {}", card.overview.italic());
    }
    println!();
}

/// Print a titled list, one entry per line
fn print_list(title: &str, entries: &[String]) {
    println!("{}", format!("{} ({}):", title, entries.len()).bold().blue());
    for entry in entries {
        println!("  - {}", entry);
    }
}
