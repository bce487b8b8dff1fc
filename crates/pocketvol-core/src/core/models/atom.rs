use nalgebra::Point3;

/// Represents one `ATOM` record of a PQR structure file.
///
/// This struct carries everything needed to re-serialize the atom into a
/// pocket subset file or a labeled structure file: identity fields are kept
/// as they appeared in the source (the residue number in particular is a
/// string, because PQR files may suffix it with an insertion-code letter).
///
/// Records are built once per run by the PQR parser and are immutable
/// thereafter. Their position in the parsed sequence (0-based) is the index
/// space used by NanoShaper's cavity atom lists, which are 1-based in the
/// raw report and converted on parse.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Sequential atom serial as written in the file (1-based, positive).
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "N", "OD1").
    pub name: String,
    /// The name of the parent residue (e.g., "ALA", "HIS").
    pub residue_name: String,
    /// The residue number, possibly carrying a trailing insertion letter
    /// (e.g., "52", "52A").
    pub residue_number: String,
    /// The chain identifier, if the source layout carried one.
    ///
    /// Serialization defaults this to `"A"` when absent.
    pub chain_id: Option<String>,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The partial atomic charge in elementary charge units.
    pub partial_charge: f64,
    /// The atomic radius in Angstroms (non-negative).
    pub radius: f64,
}

/// The chain identifier used when the source layout had none.
pub const DEFAULT_CHAIN_ID: &str = "A";

impl AtomRecord {
    /// Returns the chain identifier to use on output.
    ///
    /// # Return
    ///
    /// Returns the record's own chain identifier, or [`DEFAULT_CHAIN_ID`]
    /// if the source layout did not carry one.
    pub fn chain_or_default(&self) -> &str {
        self.chain_id.as_deref().unwrap_or(DEFAULT_CHAIN_ID)
    }
}
