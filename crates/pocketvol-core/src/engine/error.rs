use crate::core::io::pqr::PqrError;
use crate::core::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot load structure file '{path}': {source}", path = path.display())]
    StructureNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load structure: {source}")]
    Structure {
        #[from]
        source: PqrError,
    },

    #[error("Report parsing failed: {source}")]
    Report {
        #[from]
        source: ReportError,
    },

    #[error("NanoShaper exited with status {code:?}: {output}")]
    ExternalTool { code: Option<i32>, output: String },

    #[error("Pocket {rank} references atom index {index}, but the structure has {atom_count} atoms")]
    AtomIndexOutOfRange {
        rank: usize,
        index: usize,
        atom_count: usize,
    },

    #[error("Expected NanoShaper artifact is missing: {0}")]
    MissingArtifact(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
