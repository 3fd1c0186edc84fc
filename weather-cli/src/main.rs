//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring the API key into a provider
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;

use weather_core::{Config, OpenWeatherProvider};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();

    let config = Config::from_env()?;
    let provider = OpenWeatherProvider::new(config.api_key);

    cmd.run(&provider).await
}
