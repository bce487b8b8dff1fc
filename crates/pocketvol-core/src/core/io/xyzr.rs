use crate::core::models::atom::AtomRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the coordinate/radius hand-off file consumed by NanoShaper.
///
/// One row per atom, in record order: x, y, z, radius as four tab-separated
/// values at 4 decimal places.
pub fn write_xyzr(records: &[AtomRecord], writer: &mut impl Write) -> io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "{:.4}\t{:.4}\t{:.4}\t{:.4}",
            record.position.x, record.position.y, record.position.z, record.radius
        )?;
    }
    Ok(())
}

/// Writes the coordinate/radius hand-off file to a path.
pub fn write_xyzr_to_path<P: AsRef<Path>>(records: &[AtomRecord], path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_xyzr(records, &mut writer)
}
