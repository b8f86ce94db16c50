use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use sentsplit::pipeline;

#[derive(Parser, Debug)]
#[command(name = "sentsplit")]
#[command(about = "Paragraph-aware sentence splitter that turns plain text into CSV rows")]
#[command(version)]
struct Args {
    /// Path to the input text file
    input_file: PathBuf,

    /// Path to the output CSV file
    output_file: PathBuf,

    /// Path to the abbreviations file, one entry per line
    #[arg(long, default_value = "abbreviations.txt")]
    abbr: PathBuf,

    /// Stats output file path (JSON), written only when given
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging keeps CLI runs observable without polluting stdout
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    // Validate input early to fail fast with a clear error
    if !args.input_file.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input_file.display());
    }

    let stats = pipeline::run(&args.input_file, &args.output_file, &args.abbr).await?;

    if let Some(stats_path) = &args.stats_out {
        let json = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(stats_path, json).await?;
        info!("wrote run stats to {}", stats_path.display());
    }

    println!(
        "Successfully processed {} rows ({} sentences, {} paragraph breaks) to {}",
        stats.total_rows(),
        stats.sentences,
        stats.paragraph_breaks,
        args.output_file.display()
    );

    Ok(())
}
