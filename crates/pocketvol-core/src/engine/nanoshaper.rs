use crate::engine::error::EngineError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Coordinate/radius file handed to NanoShaper, written into the run dir.
pub const INPUT_XYZR_FILE: &str = "NanoShaper_input.xyzr";
/// Per-cavity atom-index report (one line per cavity, 1-based serials).
pub const CAVITY_ATOMS_FILE: &str = "cavAtomsSerials.txt";
/// Cavity-size report (header + one entry per cavity).
pub const CAVITY_SIZE_FILE: &str = "cavitiesSize.txt";
/// Triangulated surface of the whole molecule.
pub const SURFACE_FILE: &str = "triangulatedSurf.off";

/// Name of the triangulation file NanoShaper writes for the cavity with the
/// given original index.
pub fn cavity_triangulation_file(original_index: usize) -> String {
    format!("cav_tri{original_index}.off")
}

/// Blocking runner for the NanoShaper executable.
///
/// NanoShaper is a black box here: it is pointed at a parameter file, run
/// with the run directory as its working directory, and left alone until it
/// exits. Its outputs are picked up afterwards under the fixed names above.
#[derive(Debug, Clone)]
pub struct NanoShaperRunner {
    executable: PathBuf,
    prm_file: PathBuf,
    run_dir: PathBuf,
}

impl NanoShaperRunner {
    pub fn new(executable: &Path, prm_file: &Path, run_dir: &Path) -> Self {
        Self {
            executable: executable.to_path_buf(),
            prm_file: prm_file.to_path_buf(),
            run_dir: run_dir.to_path_buf(),
        }
    }

    /// Invokes NanoShaper and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ExternalTool`] with the exit code and the
    /// captured stdout/stderr when the process exits non-zero, and
    /// [`EngineError::Io`] when it cannot be spawned at all.
    pub fn run(&self) -> Result<(), EngineError> {
        info!(
            "Invoking NanoShaper: {} {} (cwd: {})",
            self.executable.display(),
            self.prm_file.display(),
            self.run_dir.display()
        );
        let output = Command::new(&self.executable)
            .arg(&self.prm_file)
            .current_dir(&self.run_dir)
            .output()?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(EngineError::ExternalTool {
                code: output.status.code(),
                output: combined.trim().to_string(),
            });
        }

        debug!(
            "NanoShaper finished, {} bytes of output",
            output.stdout.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh\n{body}").unwrap();
        let mut perms = file.metadata().unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn successful_run_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let exe = write_script(dir.path(), "ns_ok.sh", "exit 0");
        let runner = NanoShaperRunner::new(&exe, Path::new("template.prm"), dir.path());
        assert!(runner.run().is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn non_zero_exit_surfaces_code_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let exe = write_script(dir.path(), "ns_fail.sh", "echo boom >&2\nexit 1");
        let runner = NanoShaperRunner::new(&exe, Path::new("template.prm"), dir.path());

        match runner.run() {
            Err(EngineError::ExternalTool { code, output }) => {
                assert_eq!(code, Some(1));
                assert!(output.contains("boom"));
            }
            other => panic!("expected ExternalTool error, got {other:?}"),
        }
    }

    #[test]
    fn missing_executable_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let runner = NanoShaperRunner::new(
            &dir.path().join("no_such_binary"),
            Path::new("template.prm"),
            dir.path(),
        );
        assert!(matches!(runner.run(), Err(EngineError::Io(_))));
    }

    #[test]
    fn cavity_triangulation_names_use_the_original_index() {
        assert_eq!(cavity_triangulation_file(0), "cav_tri0.off");
        assert_eq!(cavity_triangulation_file(12), "cav_tri12.off");
    }
}
