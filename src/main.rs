//! vidf - find the first YouTube video matching a search phrase.
//!
//! Main entry point: loads credentials, runs one search and prints the
//! watch URL of the top hit.

mod cli;
mod config;
mod error;
mod output;
mod sanitize;
mod youtube;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use sanitize::DEFAULT_ENTITIES;
use std::io;
use youtube::{SearchRequest, YouTubeClient};

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Usage errors and every fatal error exit with status 1. Finding no
/// videos is a success.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose);

    run(cli).await
}

/// Configure `env_logger` on stderr; `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "vidf=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Run the search pipeline once.
///
/// # Arguments
/// * `cli` - Parsed command-line arguments
///
/// # Returns
/// * `Result<()>` - Success or the first fatal error
///
/// # Details
/// Credentials are loaded before the HTTP client is built, so a missing key
/// never results in a network call.
async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load credentials")?;

    let request = SearchRequest {
        query: cli.query(),
        api_key: config.api_key,
    };

    let mut client = YouTubeClient::new().context("Failed to create HTTP client")?;
    if let Some(api_url) = &cli.api_url {
        client = client.with_base_url(api_url.as_str());
    }

    let results = client
        .search(&request)
        .await
        .context("Failed to search YouTube")?;

    let rendered = output::render(results.first(), &cli.output_mode(), DEFAULT_ENTITIES);
    output::emit(&rendered, &mut io::stdout().lock()).context("Failed to write output")?;

    Ok(())
}
