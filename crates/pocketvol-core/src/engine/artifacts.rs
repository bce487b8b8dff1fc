use crate::core::io::pqr::format_atom_line;
use crate::core::models::atom::AtomRecord;
use crate::engine::error::EngineError;
use crate::engine::labels::PocketLabelMap;
use crate::engine::nanoshaper::{SURFACE_FILE, cavity_triangulation_file};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Emits the final per-pocket artifacts under the rank-ordered naming
/// scheme (`p{rank}_atm.pqr`, `p{rank}.off`, rank labels in the charge
/// column).
///
/// Atom indices arriving here are 0-based positions into the structure's
/// record sequence, already converted from NanoShaper's 1-based serials by
/// the cavity report parser.
pub struct ArtifactWriter {
    run_dir: PathBuf,
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(run_dir: &Path, output_dir: &Path) -> Self {
        Self {
            run_dir: run_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Writes the `p{rank}_atm.pqr` subset containing exactly the
    /// referenced atoms, in report order.
    pub fn write_pocket_structure(
        &self,
        rank: usize,
        atom_indices: &[usize],
        records: &[AtomRecord],
    ) -> Result<PathBuf, EngineError> {
        let path = self.output_dir.join(format!("p{rank}_atm.pqr"));
        let mut writer = BufWriter::new(File::create(&path)?);
        for &index in atom_indices {
            let record = records
                .get(index)
                .ok_or(EngineError::AtomIndexOutOfRange {
                    rank,
                    index,
                    atom_count: records.len(),
                })?;
            writeln!(writer, "{}", format_atom_line(record, record.partial_charge))?;
        }
        debug!("Wrote pocket {} subset to {}", rank, path.display());
        Ok(path)
    }

    /// Relocates NanoShaper's per-cavity triangulation file, named by the
    /// cavity's original emission index, to its rank-ordered name.
    pub fn relocate_cavity_triangulation(
        &self,
        rank: usize,
        original_index: usize,
    ) -> Result<PathBuf, EngineError> {
        let source = self.run_dir.join(cavity_triangulation_file(original_index));
        let target = self.output_dir.join(format!("p{rank}.off"));
        self.relocate(&source, &target)?;
        Ok(target)
    }

    /// Relocates the whole-molecule triangulated surface under the
    /// structure's name.
    pub fn relocate_surface(&self, structure_stem: &str) -> Result<PathBuf, EngineError> {
        let source = self.run_dir.join(SURFACE_FILE);
        let target = self.output_dir.join(format!("{structure_stem}.off"));
        self.relocate(&source, &target)?;
        Ok(target)
    }

    /// Writes the combined labeled structure: every atom of the input, with
    /// the charge column replaced by its pocket label (`0` = unclaimed).
    pub fn write_label_map(
        &self,
        structure_stem: &str,
        records: &[AtomRecord],
        labels: &PocketLabelMap,
    ) -> Result<PathBuf, EngineError> {
        let path = self
            .output_dir
            .join(format!("{structure_stem}_pocketLabels.pqr"));
        let mut writer = BufWriter::new(File::create(&path)?);
        for (index, record) in records.iter().enumerate() {
            let label = labels.label_for(index) as f64;
            writeln!(writer, "{}", format_atom_line(record, label))?;
        }
        debug!(
            "Wrote label map ({} claimed atoms) to {}",
            labels.claimed_count(),
            path.display()
        );
        Ok(path)
    }

    fn relocate(&self, source: &Path, target: &Path) -> Result<(), EngineError> {
        if !source.exists() {
            return Err(EngineError::MissingArtifact(source.to_path_buf()));
        }
        fs::rename(source, target)?;
        Ok(())
    }
}
