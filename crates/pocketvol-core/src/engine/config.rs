use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Selects which per-pocket artifacts the pipeline emits.
///
/// The modes are independently configurable; the CLI maps its flags onto
/// them (the label map replaces per-pocket structure files there, but the
/// library accepts any combination).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputModes {
    /// Emit one `p{rank}_atm.pqr` subset file per pocket.
    pub pocket_structures: bool,
    /// Relocate NanoShaper's per-cavity triangulation files (and the whole
    /// molecular surface) under rank-ordered names.
    pub triangulations: bool,
    /// Accumulate and emit the combined atom-to-pocket label map.
    pub label_map: bool,
}

impl Default for OutputModes {
    fn default() -> Self {
        Self {
            pocket_structures: true,
            triangulations: false,
            label_map: false,
        }
    }
}

/// Configuration for one ranking run.
///
/// Path defaults match the historical layout of the tool: a `temp` run
/// directory shared with NanoShaper and a `results` directory receiving a
/// per-structure output subdirectory.
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    /// Path to the input PQR structure file.
    pub structure_path: PathBuf,
    /// Working directory shared with NanoShaper (input xyzr file and raw
    /// report files live here). Default: `temp`.
    pub run_dir: PathBuf,
    /// Directory receiving the per-structure output subdirectory.
    /// Default: `results`.
    pub results_dir: PathBuf,
    /// The NanoShaper executable to invoke. Default: `./NanoShaper`.
    pub executable: PathBuf,
    /// The NanoShaper parameter file, resolved relative to the run
    /// directory. Default: `template.prm`.
    pub prm_file: PathBuf,
    /// Artifact selection.
    pub output: OutputModes,
}

#[derive(Default)]
pub struct RankConfigBuilder {
    structure_path: Option<PathBuf>,
    run_dir: Option<PathBuf>,
    results_dir: Option<PathBuf>,
    executable: Option<PathBuf>,
    prm_file: Option<PathBuf>,
    output: Option<OutputModes>,
}

impl RankConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure_path(mut self, path: PathBuf) -> Self {
        self.structure_path = Some(path);
        self
    }
    pub fn run_dir(mut self, path: PathBuf) -> Self {
        self.run_dir = Some(path);
        self
    }
    pub fn results_dir(mut self, path: PathBuf) -> Self {
        self.results_dir = Some(path);
        self
    }
    pub fn executable(mut self, path: PathBuf) -> Self {
        self.executable = Some(path);
        self
    }
    pub fn prm_file(mut self, path: PathBuf) -> Self {
        self.prm_file = Some(path);
        self
    }
    pub fn output(mut self, modes: OutputModes) -> Self {
        self.output = Some(modes);
        self
    }

    /// Finalizes the configuration, applying documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] if the structure path was
    /// never provided.
    pub fn build(self) -> Result<RankConfig, ConfigError> {
        Ok(RankConfig {
            structure_path: self
                .structure_path
                .ok_or(ConfigError::MissingParameter("structure_path"))?,
            run_dir: self.run_dir.unwrap_or_else(|| PathBuf::from("temp")),
            results_dir: self.results_dir.unwrap_or_else(|| PathBuf::from("results")),
            executable: self
                .executable
                .unwrap_or_else(|| PathBuf::from("./NanoShaper")),
            prm_file: self.prm_file.unwrap_or_else(|| PathBuf::from("template.prm")),
            output: self.output.unwrap_or_default(),
        })
    }
}
