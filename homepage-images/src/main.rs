use anyhow::Context;
use clap::Parser;
use homepage_images::{FetchConfig, HomepageAggregator, PageStructure, DEFAULT_EDITION};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Collect the promotional images shown on a homepage edition.
#[derive(Debug, Parser)]
#[command(name = "homepage-images", version)]
struct Cli {
    /// Edition to collect, e.g. "uk" or "international"
    #[arg(short, long, default_value = DEFAULT_EDITION)]
    edition: String,

    /// JSON page structure to use instead of the built-in one
    #[arg(short, long)]
    structure: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = FetchConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let structure = match &cli.structure {
        Some(path) => PageStructure::from_json_file(path)
            .with_context(|| format!("reading page structure from {}", path.display()))?,
        None => PageStructure::default(),
    };

    let aggregator = HomepageAggregator::from_config(config, structure)?;

    info!("Collecting images for edition {}", cli.edition);
    let images = aggregator.get_all_images(&cli.edition).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&images)?
    } else {
        serde_json::to_string(&images)?
    };
    println!("{}", output);

    info!("Finished with {} images", images.len());
    Ok(())
}
