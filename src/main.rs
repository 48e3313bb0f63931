use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use coalesce::aggregator::process_directory;
use coalesce::clustering::DEFAULT_SIMILARITY_THRESHOLD;
use coalesce::logging::configure_logging;
use coalesce::PipelineConfig;

/// Coalesce per-document knowledge-graph fragments into one canonical graph.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing knowledge-graph fragment JSON files
    input_dir: PathBuf,

    /// Directory the clustered graph and clustering details are written to
    output_dir: PathBuf,

    /// Similarity threshold for entity clustering, in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: f64,
}

fn main() -> Result<()> {
    configure_logging();
    let cli = Cli::parse();

    if !(cli.threshold > 0.0 && cli.threshold <= 1.0) {
        bail!(
            "similarity threshold must lie in (0, 1], got {}",
            cli.threshold
        );
    }

    let config = PipelineConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        similarity_threshold: cli.threshold,
    };

    process_directory(&config)?;
    Ok(())
}
