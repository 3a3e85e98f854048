//! yt-report - search YouTube for a phrase and report each result's channel.
//!
//! Main entry point: CLI parsing, configuration, and wiring of the report
//! pipeline to stdout.

mod config;
mod report;
mod youtube;

use clap::Parser;
use config::Config;
use log::info;
use std::io;
use std::path::PathBuf;
use youtube::YouTubeClient;

/// Search YouTube and report each video's uploading channel.
#[derive(Debug, Parser)]
#[command(name = "yt-report", version)]
struct Cli {
    /// Search phrase; falls back to `default_query` from the config file
    query: Option<String>,

    /// Maximum number of search results to report on
    #[arg(short = 'n', long)]
    limit: Option<u32>,

    /// Path to an alternate config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, builds the API client once, and runs the report
/// against stdout. Any failed lookup terminates the run with a non-zero
/// exit status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if config.api_key.is_empty() {
        eprintln!("Error: YouTube API key is required.");
        eprintln!(
            "Please create a config file at: {}",
            Config::default_config_path()?.display()
        );
        eprintln!("See config.jsonc.example for template.");
        return Err(anyhow::anyhow!("API key not configured"));
    }

    let query = match cli.query {
        Some(query) => query,
        None if !config.default_query.is_empty() => config.default_query.clone(),
        None => {
            return Err(anyhow::anyhow!(
                "no search phrase given; pass one as an argument or set `default_query` in the config file"
            ));
        }
    };
    let limit = cli.limit.unwrap_or(config.max_results);

    let client = YouTubeClient::new(&config)?;
    info!("searching for {:?} (limit {})", query, limit);

    let mut stdout = io::stdout().lock();
    report::run_report(&client, &query, limit, &mut stdout).await
}
