//! # Core Module
//!
//! Provides the fundamental data structures and parsers for pocket
//! post-processing: the atom record model, PQR and XYZR file I/O, and the
//! parsers for NanoShaper's raw cavity report files.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - The ordered atom record
//!   sequence loaded from a PQR structure file
//! - **File I/O** ([`io`]) - Layout-tolerant PQR reading, fixed-width PQR
//!   writing, and the XYZR hand-off format consumed by NanoShaper
//! - **Report Parsing** ([`reports`]) - Cavity atom-index and cavity-size
//!   report parsing, including true-cavity filtering

pub mod io;
pub mod models;
pub mod reports;
