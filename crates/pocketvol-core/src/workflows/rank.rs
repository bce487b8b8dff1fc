use crate::core::io::pqr::{PqrError, PqrFile};
use crate::core::io::traits::StructureFile;
use crate::core::io::xyzr::write_xyzr_to_path;
use crate::core::reports::cavity::parse_cavity_atoms;
use crate::core::reports::volume::{true_cavity_volumes, volume_at};
use crate::engine::artifacts::ArtifactWriter;
use crate::engine::config::RankConfig;
use crate::engine::error::EngineError;
use crate::engine::labels::PocketLabelMap;
use crate::engine::nanoshaper::{
    CAVITY_ATOMS_FILE, CAVITY_SIZE_FILE, INPUT_XYZR_FILE, NanoShaperRunner,
};
use crate::engine::ranking::PocketRanking;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// The result of one complete detect-rank-emit run.
#[derive(Debug, Clone)]
pub struct RankingOutcome {
    /// Number of pockets NanoShaper detected.
    pub pocket_count: usize,
    /// Pocket volumes in ranked (descending) order.
    pub ranked_volumes: Vec<f64>,
    /// Directory the per-pocket artifacts were written to.
    pub output_dir: PathBuf,
    /// The human-readable summary file, written beside the input structure.
    pub summary_path: PathBuf,
    /// Wall-clock time of the whole run, external tool included.
    pub elapsed: Duration,
}

/// Runs the complete pipeline: load the structure, hand its coordinates to
/// NanoShaper, rank the detected cavities by volume, and emit the
/// rank-ordered artifacts selected in the configuration.
///
/// The run is sequential and blocking; any failure aborts it. Output files
/// written before a failure are left behind as-is.
#[instrument(skip_all, name = "ranking_workflow")]
pub fn run(config: &RankConfig) -> Result<RankingOutcome, EngineError> {
    let start = Instant::now();

    let stem = config
        .structure_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "structure".to_string());

    info!("Loading structure from {}", config.structure_path.display());
    // An unreadable file is reported with its path; format errors keep
    // their own identity.
    let records = PqrFile::read_from_path(&config.structure_path).map_err(|e| match e {
        PqrError::Io(source) => EngineError::StructureNotFound {
            path: config.structure_path.clone(),
            source,
        },
        other => EngineError::from(other),
    })?;
    info!("Loaded {} atom records", records.len());

    fs::create_dir_all(&config.run_dir)?;
    write_xyzr_to_path(&records, config.run_dir.join(INPUT_XYZR_FILE))?;

    let runner = NanoShaperRunner::new(&config.executable, &config.prm_file, &config.run_dir);
    runner.run()?;

    let pockets = parse_cavity_atoms(&read_report(&config.run_dir.join(CAVITY_ATOMS_FILE))?)?;
    let volumes = true_cavity_volumes(&read_report(&config.run_dir.join(CAVITY_SIZE_FILE))?)?;
    // One volume per cavity-index line; a shortfall here means the two
    // reports fell out of positional alignment.
    let pocket_volumes = (0..pockets.len())
        .map(|position| volume_at(&volumes, position))
        .collect::<Result<Vec<f64>, _>>()?;

    let ranking = PocketRanking::by_descending_volume(&pocket_volumes);
    let ranked_volumes = ranking.apply(&pocket_volumes);

    info!("Number of pockets found: {}", ranking.len());
    if !ranking.is_empty() {
        info!("Largest volume = {}", ranked_volumes[0]);
        info!("Smallest volume = {}", ranked_volumes[ranked_volumes.len() - 1]);
    }

    let output_dir = config.results_dir.join(&stem);
    fs::create_dir_all(&output_dir)?;
    let writer = ArtifactWriter::new(&config.run_dir, &output_dir);

    let summary_path = config
        .structure_path
        .with_file_name(format!("{stem}_infoPockets.txt"));
    let mut summary = BufWriter::new(File::create(&summary_path)?);

    let mut labels = PocketLabelMap::new();
    for (position, original_index) in ranking.iter() {
        let rank = position + 1;
        writeln!(summary, "Pocket {rank}")?;
        writeln!(summary, "  Vol={:.2}", pocket_volumes[original_index])?;

        let atom_indices = &pockets[original_index];
        if config.output.pocket_structures {
            writer.write_pocket_structure(rank, atom_indices, &records)?;
        }
        if config.output.triangulations {
            writer.relocate_cavity_triangulation(rank, original_index)?;
        }
        if config.output.label_map {
            labels.claim(rank, atom_indices);
        }
    }

    if config.output.label_map {
        writer.write_label_map(&stem, &records, &labels)?;
    }
    if config.output.triangulations {
        writer.relocate_surface(&stem)?;
    }

    let elapsed = start.elapsed();
    writeln!(summary, "\n---------\nElapsed time: {elapsed:.2?}")?;
    summary.flush()?;

    Ok(RankingOutcome {
        pocket_count: ranking.len(),
        ranked_volumes,
        output_dir,
        summary_path,
        elapsed,
    })
}

fn read_report(path: &Path) -> Result<Vec<String>, EngineError> {
    if !path.exists() {
        return Err(EngineError::MissingArtifact(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::engine::config::{OutputModes, RankConfigBuilder};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    const STRUCTURE: &str = "\
ATOM      1  N   ALA A   1      -8.901   4.127  -0.555 -0.3000  1.8500
ATOM      2  CA  ALA A   1      -8.608   3.135  -1.618  0.0300  1.9000
ATOM      3  C   ALA A   2      -7.221   2.458  -1.897  0.5500  1.7000
END
";

    fn write_stub_tool(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("NanoShaper");
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn config_in(root: &Path, tool_body: &str, output: OutputModes) -> RankConfig {
        let structure_path = root.join("1abc.pqr");
        fs::write(&structure_path, STRUCTURE).unwrap();
        let executable = write_stub_tool(root, tool_body);
        RankConfigBuilder::new()
            .structure_path(structure_path)
            .run_dir(root.join("temp"))
            .results_dir(root.join("results"))
            .executable(executable)
            .output(output)
            .build()
            .unwrap()
    }

    const TWO_POCKET_TOOL: &str = "\
printf '1 2\\n3\\n' > cavAtomsSerials.txt
printf 'header\\n0 13.0 12.34 0\\n1 6.0 5.0 1\\n2 41.0 40.0 0\\n' > cavitiesSize.txt
printf 'OFF\\n' > cav_tri0.off
printf 'OFF\\n' > cav_tri1.off
printf 'OFF\\n' > triangulatedSurf.off
";

    #[test]
    fn ranks_pockets_by_descending_volume_and_emits_subsets() {
        let root = TempDir::new().unwrap();
        let config = config_in(root.path(), TWO_POCKET_TOOL, OutputModes::default());

        let outcome = run(&config).unwrap();
        assert_eq!(outcome.pocket_count, 2);
        assert_eq!(outcome.ranked_volumes, vec![40.0, 12.34]);

        // The xyzr hand-off file has one row per atom.
        let xyzr = fs::read_to_string(root.path().join("temp").join(INPUT_XYZR_FILE)).unwrap();
        assert_eq!(xyzr.lines().count(), 3);

        // Rank 1 is the 40.0-volume cavity (original index 1, atom 3).
        let p1 = fs::read_to_string(outcome.output_dir.join("p1_atm.pqr")).unwrap();
        assert_eq!(p1.lines().count(), 1);
        assert!(p1.contains("    3 C "));

        let p2 = fs::read_to_string(outcome.output_dir.join("p2_atm.pqr")).unwrap();
        assert_eq!(p2.lines().count(), 2);

        let summary = fs::read_to_string(&outcome.summary_path).unwrap();
        assert!(summary.contains("Pocket 1\n  Vol=40.00\n"));
        assert!(summary.contains("Pocket 2\n  Vol=12.34\n"));
        assert!(summary.contains("Elapsed time:"));
    }

    #[test]
    fn triangulations_are_relocated_by_rank() {
        let root = TempDir::new().unwrap();
        let output = OutputModes {
            triangulations: true,
            ..OutputModes::default()
        };
        let config = config_in(root.path(), TWO_POCKET_TOOL, output);

        let outcome = run(&config).unwrap();
        // Rank 1 came from original cavity index 1.
        assert!(outcome.output_dir.join("p1.off").exists());
        assert!(outcome.output_dir.join("p2.off").exists());
        assert!(outcome.output_dir.join("1abc.off").exists());
        assert!(!root.path().join("temp/cav_tri0.off").exists());
    }

    #[test]
    fn label_map_mode_emits_the_combined_labeled_structure() {
        let root = TempDir::new().unwrap();
        let output = OutputModes {
            pocket_structures: false,
            triangulations: false,
            label_map: true,
        };
        let config = config_in(root.path(), TWO_POCKET_TOOL, output);

        let outcome = run(&config).unwrap();
        assert!(!outcome.output_dir.join("p1_atm.pqr").exists());

        let labeled =
            fs::read_to_string(outcome.output_dir.join("1abc_pocketLabels.pqr")).unwrap();
        let labels: Vec<&str> = labeled
            .lines()
            .map(|l| l.split_whitespace().nth(9).unwrap())
            .collect();
        // Atoms 1-2 belong to the rank-2 pocket, atom 3 to rank 1.
        assert_eq!(labels, vec!["2.0000", "2.0000", "1.0000"]);
    }

    #[test]
    fn zero_pockets_produce_an_empty_summary_without_extrema() {
        let root = TempDir::new().unwrap();
        let tool = "\
: > cavAtomsSerials.txt
printf 'header\\n' > cavitiesSize.txt
";
        let config = config_in(root.path(), tool, OutputModes::default());

        let outcome = run(&config).unwrap();
        assert_eq!(outcome.pocket_count, 0);
        assert!(outcome.ranked_volumes.is_empty());

        let summary = fs::read_to_string(&outcome.summary_path).unwrap();
        assert!(!summary.contains("Pocket"));
        assert!(summary.contains("Elapsed time:"));
    }

    #[test]
    fn external_tool_failure_aborts_before_any_result_is_written() {
        let root = TempDir::new().unwrap();
        let config = config_in(root.path(), "echo surface failed >&2\nexit 1", OutputModes::default());

        match run(&config) {
            Err(EngineError::ExternalTool { code, output }) => {
                assert_eq!(code, Some(1));
                assert!(output.contains("surface failed"));
            }
            other => panic!("expected ExternalTool error, got {other:?}"),
        }

        // The intermediate coordinate file is the only product of the run.
        assert!(root.path().join("temp").join(INPUT_XYZR_FILE).exists());
        assert!(!root.path().join("results").join("1abc").exists());
        assert!(!root.path().join("1abc_infoPockets.txt").exists());
    }

    #[test]
    fn missing_structure_file_error_names_the_path() {
        let root = TempDir::new().unwrap();
        let config = RankConfigBuilder::new()
            .structure_path(root.path().join("ghost.pqr"))
            .run_dir(root.path().join("temp"))
            .results_dir(root.path().join("results"))
            .build()
            .unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, EngineError::StructureNotFound { .. }));
        assert!(err.to_string().contains("ghost.pqr"));
    }

    #[test]
    fn misaligned_reports_surface_a_volume_not_found_error() {
        let root = TempDir::new().unwrap();
        // Two cavity-index lines but a single true-cavity volume.
        let tool = "\
printf '1\\n2\\n' > cavAtomsSerials.txt
printf 'header\\n0 13.0 12.34 0\\n1 6.0 5.0 1\\n' > cavitiesSize.txt
";
        let config = config_in(root.path(), tool, OutputModes::default());

        match run(&config) {
            Err(EngineError::Report { source }) => {
                assert_eq!(
                    source,
                    crate::core::reports::ReportError::VolumeNotFound { position: 1 }
                );
            }
            other => panic!("expected Report error, got {other:?}"),
        }
    }
}
