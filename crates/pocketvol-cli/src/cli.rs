use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Luca Gagliardi",
    version,
    about = "PocketVol - Volume ranking of protein pockets detected by the NanoShaper molecular surface software.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input structure file (must end in .pqr).
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Relocate NanoShaper's triangulated-surface files (per-pocket and
    /// whole-molecule) under rank-ordered names.
    #[arg(short = 't', long)]
    pub triangulations: bool,

    /// Emit a single combined label-map structure (pocket rank in the
    /// charge column) instead of per-pocket structure files.
    #[arg(short = 'm', long)]
    pub label_map: bool,

    /// Path to the NanoShaper executable.
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// NanoShaper parameter file, resolved relative to the run directory.
    #[arg(long, value_name = "PATH")]
    pub prm: Option<PathBuf>,

    /// Working directory shared with NanoShaper.
    #[arg(long, value_name = "DIR")]
    pub run_dir: Option<PathBuf>,

    /// Directory receiving the per-structure output subdirectory.
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
