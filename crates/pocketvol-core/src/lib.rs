//! # PocketVol Core Library
//!
//! A post-processing library around the NanoShaper molecular-surface and
//! pocket-detection software, providing volume ranking of detected cavities
//! and re-emission of per-pocket structure artifacts.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless atom record model,
//!   PQR/XYZR file I/O, and parsers for the raw report files NanoShaper
//!   produces (`cavAtomsSerials.txt`, `cavitiesSize.txt`).
//!
//! - **[`engine`]: The Logic Core.** Implements the volume-based pocket
//!   ranking permutation, the first-write-wins pocket label map, the
//!   rank-ordered artifact writer, and the blocking NanoShaper subprocess
//!   runner, together with the pipeline configuration.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together
//!   into the complete detect-rank-emit pipeline. It provides a simple entry
//!   point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
