//! # Engine Module
//!
//! The stateful logic layer of the pipeline: the descending-volume ranking
//! permutation ([`ranking`]), the first-write-wins pocket label map
//! ([`labels`]), the rank-ordered artifact writer ([`artifacts`]), the
//! blocking NanoShaper subprocess runner ([`nanoshaper`]), and the pipeline
//! configuration ([`config`]).

pub mod artifacts;
pub mod config;
pub mod error;
pub mod labels;
pub mod nanoshaper;
pub mod ranking;
