mod cli;
mod config;
mod error;
mod logging;
mod ui;

use crate::cli::Cli;
use crate::config::PartialRankConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use pocketvol::workflows::rank;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    ctrlc::set_handler(|| {
        eprintln!("\nUser exit");
        std::process::exit(130);
    })
    .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install interrupt handler: {e}")))?;

    info!("PocketVol v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let partial = match &cli.config {
        Some(path) => PartialRankConfig::from_file(path)?,
        None => PartialRankConfig::default(),
    };
    let rank_config = partial.merge_with_cli(&cli)?;

    let structure_name = rank_config
        .structure_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let spinner = ui::pipeline_spinner(&structure_name);
    let result = rank::run(&rank_config);
    spinner.finish_and_clear();
    let outcome = result?;

    println!("Number of pockets found: {}", outcome.pocket_count);
    if let (Some(largest), Some(smallest)) = (
        outcome.ranked_volumes.first(),
        outcome.ranked_volumes.last(),
    ) {
        println!("Largest volume = {largest}");
        println!("Smallest volume = {smallest}");
    }
    println!("✓ Results written to: {}", outcome.output_dir.display());
    println!("  Summary: {}", outcome.summary_path.display());
    println!("  Elapsed: {:.2?}", outcome.elapsed);

    Ok(())
}
