//! The public, user-facing layer: complete pipeline entry points tying the
//! `core` parsers and the `engine` logic together.

pub mod rank;
