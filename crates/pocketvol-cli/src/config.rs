use crate::cli::Cli;
use crate::error::{CliError, Result};
use pocketvol::engine::config::{OutputModes, RankConfig, RankConfigBuilder};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings read from a TOML configuration file.
///
/// Every field may be omitted; CLI arguments take precedence over file
/// values, and built-in defaults fill whatever remains.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialRankConfig {
    pub executable: Option<PathBuf>,
    pub prm_file: Option<PathBuf>,
    pub run_dir: Option<PathBuf>,
    pub results_dir: Option<PathBuf>,
}

impl PartialRankConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final pipeline configuration from file values and CLI
    /// arguments, validating the structure path.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<RankConfig> {
        if cli.structure.extension().and_then(|e| e.to_str()) != Some("pqr") {
            return Err(CliError::Argument(format!(
                "must provide a pqr file, got '{}'",
                cli.structure.display()
            )));
        }

        let output = OutputModes {
            // The label map replaces the per-pocket structure files.
            pocket_structures: !cli.label_map,
            triangulations: cli.triangulations,
            label_map: cli.label_map,
        };

        let mut builder = RankConfigBuilder::new()
            .structure_path(cli.structure.clone())
            .output(output);
        if let Some(path) = cli.executable.clone().or(self.executable) {
            builder = builder.executable(path);
        }
        if let Some(path) = cli.prm.clone().or(self.prm_file) {
            builder = builder.prm_file(path);
        }
        if let Some(path) = cli.run_dir.clone().or(self.run_dir) {
            builder = builder.run_dir(path);
        }
        if let Some(path) = cli.results_dir.clone().or(self.results_dir) {
            builder = builder.results_dir(path);
        }

        Ok(builder.build()?)
    }
}
