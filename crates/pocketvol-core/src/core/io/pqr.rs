use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomRecord;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PqrError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("incorrect structure formatting")]
    UnrecognizedFormat,
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PqrParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PqrParseErrorKind {
    #[error("Expected {expected} fields for the established layout, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("Record tag '{value}' is not ATOM")]
    NotAnAtomRecord { value: String },
    #[error("Invalid integer in field '{field}' (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid float in field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Atom serial must be positive (value: '{value}')")]
    NonPositiveSerial { value: String },
    #[error("Invalid residue number (value: '{value}')")]
    InvalidResidueNumber { value: String },
    #[error("Radius must be non-negative (value: '{value}')")]
    NegativeRadius { value: String },
}

/// The two tolerated PQR column layouts, decided once from the first data
/// line of a file and applied uniformly to the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PqrLayout {
    /// `ATOM serial name resName chainId resNum x y z charge radius`
    WithChain,
    /// `ATOM serial name resName resNum x y z charge radius`
    WithoutChain,
}

impl PqrLayout {
    const fn field_count(self) -> usize {
        match self {
            PqrLayout::WithChain => 11,
            PqrLayout::WithoutChain => 10,
        }
    }

    /// Tries each layout in order against a data line, retaining the first
    /// that matches.
    fn detect(line: &str) -> Option<PqrLayout> {
        [PqrLayout::WithChain, PqrLayout::WithoutChain]
            .into_iter()
            .find(|&layout| parse_atom_line(line, layout, 0).is_ok())
    }
}

const SKIP_PREFIXES: [&str; 5] = ["#", "CRYST", "REMARK", "TER", "END"];

fn is_skippable(line: &str) -> bool {
    line.trim().is_empty() || SKIP_PREFIXES.iter().any(|p| line.starts_with(p))
}

fn is_residue_number(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let digits = match digits.strip_suffix(|c: char| c.is_ascii_uppercase()) {
        Some(rest) => rest,
        None => digits,
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_float(
    token: &str,
    field: &'static str,
    line_num: usize,
) -> Result<f64, PqrError> {
    token.parse().map_err(|_| PqrError::Parse {
        line: line_num,
        kind: PqrParseErrorKind::InvalidFloat {
            field,
            value: token.into(),
        },
    })
}

fn parse_atom_line(
    line: &str,
    layout: PqrLayout,
    line_num: usize,
) -> Result<AtomRecord, PqrError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != layout.field_count() {
        return Err(PqrError::Parse {
            line: line_num,
            kind: PqrParseErrorKind::FieldCount {
                expected: layout.field_count(),
                found: fields.len(),
            },
        });
    }
    if fields[0] != "ATOM" {
        return Err(PqrError::Parse {
            line: line_num,
            kind: PqrParseErrorKind::NotAnAtomRecord {
                value: fields[0].into(),
            },
        });
    }

    let serial: usize = fields[1].parse().map_err(|_| PqrError::Parse {
        line: line_num,
        kind: PqrParseErrorKind::InvalidInt {
            field: "serial",
            value: fields[1].into(),
        },
    })?;
    if serial == 0 {
        return Err(PqrError::Parse {
            line: line_num,
            kind: PqrParseErrorKind::NonPositiveSerial {
                value: fields[1].into(),
            },
        });
    }

    let (chain_id, res_num_idx) = match layout {
        PqrLayout::WithChain => (Some(fields[4].to_string()), 5),
        PqrLayout::WithoutChain => (None, 4),
    };

    let res_num = fields[res_num_idx];
    if !is_residue_number(res_num) {
        return Err(PqrError::Parse {
            line: line_num,
            kind: PqrParseErrorKind::InvalidResidueNumber {
                value: res_num.into(),
            },
        });
    }

    let coord_idx = res_num_idx + 1;
    let x = parse_float(fields[coord_idx], "x", line_num)?;
    let y = parse_float(fields[coord_idx + 1], "y", line_num)?;
    let z = parse_float(fields[coord_idx + 2], "z", line_num)?;
    let charge = parse_float(fields[coord_idx + 3], "charge", line_num)?;
    let radius = parse_float(fields[coord_idx + 4], "radius", line_num)?;
    if radius < 0.0 {
        return Err(PqrError::Parse {
            line: line_num,
            kind: PqrParseErrorKind::NegativeRadius {
                value: fields[coord_idx + 4].into(),
            },
        });
    }

    Ok(AtomRecord {
        serial,
        name: fields[2].to_string(),
        residue_name: fields[3].to_string(),
        residue_number: res_num.to_string(),
        chain_id,
        position: Point3::new(x, y, z),
        partial_charge: charge,
        radius,
    })
}

/// Serializes one atom record in the fixed-width PQR format, with the
/// charge column taken from `charge` rather than the record itself (the
/// label map overwrites it with a pocket rank).
pub fn format_atom_line(record: &AtomRecord, charge: f64) -> String {
    format!(
        "{:<6}{:>5} {:<5}{:>3} {:1}{:>5}   {:>8.3} {:>8.3} {:>8.3} {:>8.4} {:>8.4}",
        "ATOM",
        record.serial,
        record.name,
        record.residue_name,
        record.chain_or_default(),
        record.residue_number,
        record.position.x,
        record.position.y,
        record.position.z,
        charge,
        record.radius
    )
}

pub struct PqrFile;

impl StructureFile for PqrFile {
    type Error = PqrError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<AtomRecord>, Self::Error> {
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

        // Layout is established once, from the first data line only.
        let layout = lines
            .iter()
            .find(|line| !is_skippable(line))
            .and_then(|line| PqrLayout::detect(line))
            .ok_or(PqrError::UnrecognizedFormat)?;

        let mut records = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if is_skippable(line) {
                continue;
            }
            records.push(parse_atom_line(line, layout, idx + 1)?);
        }
        Ok(records)
    }

    fn write_to(records: &[AtomRecord], writer: &mut impl Write) -> Result<(), Self::Error> {
        for record in records {
            writeln!(writer, "{}", format_atom_line(record, record.partial_charge))?;
        }
        Ok(())
    }
}
