//! Provides input/output functionality for the file formats crossing the
//! NanoShaper boundary.
//!
//! This module contains the layout-tolerant PQR reader and fixed-width PQR
//! writer, the XYZR coordinate/radius format handed to NanoShaper, and the
//! trait-based interface shared by structure file formats.

pub mod pqr;
pub mod traits;
pub mod xyzr;
