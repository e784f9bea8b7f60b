use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use moodring::config::Config;
use moodring::sentiment::stats::top_negative;
use moodring::{output, pipeline, seed, status, store, twitter, web};

/// Moodring: market sentiment tracking for Tesla chatter on X.
///
/// Collects recent posts about the company, cleans the text, scores
/// sentiment with two lexicon analyzers, and serves the results through
/// a dashboard and a JSON API.
#[derive(Parser)]
#[command(name = "moodring", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect recent posts from the search API into the raw CSV
    Collect {
        /// Override the MAX_TWEETS cap for this run
        #[arg(long)]
        max: Option<usize>,
    },

    /// Generate synthetic raw posts (no API quota needed)
    Seed {
        /// How many posts to generate (default: 500)
        #[arg(long, default_value = "500")]
        count: usize,
    },

    /// Clean text and extract keyword features from the raw CSV
    Preprocess,

    /// Score sentiment with both lexicons and classify every post
    Analyze,

    /// Show the aggregate summary and the most negative posts
    Report {
        /// How many negative posts to list (default: 5)
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Serve the dashboard and the JSON API
    Serve {
        /// Port to listen on (default: 8000)
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Show pipeline status (which stage files exist, record counts)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("moodring=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect { max } => {
            let config = Config::load()?;
            config.require_twitter()?;

            let max_posts = max.unwrap_or(config.max_posts);

            let client =
                twitter::client::SearchClient::new(&config.api_url, &config.bearer_token)?;

            // Probe the API first so an auth problem fails with guidance
            // instead of dying mid-collection.
            println!("Testing the search API connection...");
            client.verify_credentials().await?;
            println!("  {}", "Connection OK.".green());

            println!("Collecting up to {max_posts} posts about Tesla...");
            let count = twitter::search::collect_posts(
                &client,
                twitter::SEARCH_QUERY,
                max_posts,
                &config.raw_path(),
            )
            .await?;

            println!("\n{}", "Collection complete.".bold());
            println!("  Posts on disk: {count}");
            println!("  File: {}", config.raw_path().display());
            println!("\nNext step: moodring preprocess");
        }

        Commands::Seed { count } => {
            let config = Config::load()?;
            let output = config.raw_path();

            println!("Generating {count} synthetic posts...");
            let posts = seed::generate_posts(count);

            store::save_raw(&output, &posts)?;

            println!("{}", "Seed data written.".bold());
            println!("  Posts: {}", posts.len());
            println!("  File: {}", output.display());
            println!("\nNext step: moodring preprocess");
        }

        Commands::Preprocess => {
            let config = Config::load()?;

            let summary =
                pipeline::preprocess::run(&config.raw_path(), &config.cleaned_path())?;

            println!("\n{}", "Preprocessing complete.".bold());
            println!("  Posts kept: {}", summary.kept);
            if summary.removed_empty > 0 {
                println!(
                    "  {} {} posts were empty after cleaning and were dropped",
                    "Note:".yellow(),
                    summary.removed_empty
                );
            }
            println!("  File: {}", config.cleaned_path().display());
            println!("\nNext step: moodring analyze");
        }

        Commands::Analyze => {
            let config = Config::load()?;

            let (scored, stats) =
                pipeline::analyze::run(&config.cleaned_path(), &config.results_path())?;

            output::terminal::display_stats(&stats);

            let negative: Vec<_> = scored
                .into_iter()
                .filter(|p| p.sentiment == "negative")
                .collect();
            output::terminal::display_top_negative(&top_negative(&negative, 5));

            println!("Results written to {}", config.results_path().display());
            println!("\nNext step: moodring serve");
        }

        Commands::Report { top } => {
            let config = Config::load()?;
            let path = config.results_path();

            if !path.exists() {
                anyhow::bail!(
                    "Results file not found: {}\n\
                     Run `moodring analyze` first.",
                    path.display()
                );
            }

            let posts = store::load_results(&path)?;
            let stats = moodring::sentiment::SentimentStats::from_posts(&posts);

            output::terminal::display_stats(&stats);

            let negative: Vec<_> = posts
                .into_iter()
                .filter(|p| p.sentiment == "negative")
                .collect();
            output::terminal::display_top_negative(&top_negative(&negative, top));
        }

        Commands::Serve { port, bind } => {
            let config = Config::load()?;

            if !config.results_path().exists() {
                println!(
                    "{} No results file yet — the dashboard will be empty until you run `moodring analyze`.",
                    "Warning:".yellow()
                );
            }

            info!("Starting web server");
            web::run_server(config, port, &bind).await?;
        }

        Commands::Status => {
            let config = Config::load()?;
            status::show(&config)?;
        }
    }

    Ok(())
}
