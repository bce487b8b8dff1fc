//! Data structures for representing the atoms of a loaded structure file.

pub mod atom;
