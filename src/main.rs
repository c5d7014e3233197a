use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use tigertag_snapshot::{Config, OutputFormat, Pipeline, TigerTagScraper, export};

#[derive(Parser)]
#[command(name = "tigertag-snapshot")]
#[command(about = "Snapshot the TigerTag \"get all\" endpoints into one JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every "get all" endpoint and write the snapshot
    Fetch {
        /// Overrides TIGERTAG_OUTPUT
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write single-line JSON instead of indented
        #[arg(long)]
        compact: bool,
    },
    /// Merge snapshot files into one object keyed by name
    Pack {
        #[arg(short, long)]
        output: PathBuf,
        /// Inputs as NAME=FILE
        #[arg(required = true, value_parser = parse_input)]
        inputs: Vec<(String, PathBuf)>,
    },
}

fn parse_input(raw: &str) -> Result<(String, PathBuf), String> {
    match raw.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=FILE, got `{raw}`")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tigertag_snapshot=info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { output, compact } => {
            let config = Config::from_env()?;
            let output_path = output.unwrap_or_else(|| config.output_path.clone());
            let format = if compact {
                OutputFormat::Compact
            } else {
                OutputFormat::Pretty
            };

            info!(spec_url = %config.spec_url, "Fetching TigerTag snapshot");
            let scraper = TigerTagScraper::new(&config).context("Failed to build HTTP client")?;
            let pipeline = Pipeline::new(scraper, output_path, format);
            pipeline.run().await.context("Failed to write snapshot")?;
        }
        Commands::Pack { output, inputs } => {
            export::pack(&inputs, &output).context("Failed to pack snapshots")?;
        }
    }

    Ok(())
}
