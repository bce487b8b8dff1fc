//! Parsers for the raw report files NanoShaper writes next to its run
//! directory: the per-cavity atom-index report (`cavAtomsSerials.txt`) and
//! the cavity-size report (`cavitiesSize.txt`).
//!
//! The two reports are positionally aligned: the Nth atom-index line
//! describes the same cavity as the Nth *true-cavity* entry of the size
//! report. That alignment is load-bearing for ranking and is preserved
//! exactly by these parsers.

pub mod cavity;
pub mod volume;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    #[error("Invalid atom serial '{value}' on cavity line {line}")]
    InvalidAtomSerial { line: usize, value: String },
    #[error("Malformed size-report entry on line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },
    #[error("Cannot find volume for pocket position {position}")]
    VolumeNotFound { position: usize },
}
