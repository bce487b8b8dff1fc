use super::ReportError;

/// Extracts the true-cavity volumes from the cavity-size report, in file
/// order.
///
/// The first line is a header and is ignored. Each remaining entry ends in
/// `[volume, indicator]`: the indicator is an integer flag whose zero value
/// marks a true cavity; entries with a non-zero indicator (auxiliary or
/// excluded cavity variants) do not count toward the positional index that
/// aligns this report with the cavity atom-index report.
///
/// A volume of `0.0` is returned as-is: unlike the historical behavior of
/// the tool this replaces, "position not found" is signaled explicitly by
/// [`volume_at`] rather than overloaded onto the zero value.
pub fn true_cavity_volumes(lines: &[String]) -> Result<Vec<f64>, ReportError> {
    let mut volumes = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let line_num = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 2 {
            return Err(ReportError::MalformedEntry {
                line: line_num,
                reason: format!("expected at least 2 fields, found {}", fields.len()),
            });
        }
        let indicator: i64 =
            fields[fields.len() - 1]
                .parse()
                .map_err(|_| ReportError::MalformedEntry {
                    line: line_num,
                    reason: format!("non-integer indicator '{}'", fields[fields.len() - 1]),
                })?;
        if indicator != 0 {
            continue;
        }
        let volume: f64 =
            fields[fields.len() - 2]
                .parse()
                .map_err(|_| ReportError::MalformedEntry {
                    line: line_num,
                    reason: format!("non-numeric volume '{}'", fields[fields.len() - 2]),
                })?;
        volumes.push(volume);
    }
    Ok(volumes)
}

/// Returns the volume of the true cavity at `position` (0-based, counted
/// among true cavities only).
///
/// # Errors
///
/// Returns [`ReportError::VolumeNotFound`] if the position is out of range.
pub fn volume_at(volumes: &[f64], position: usize) -> Result<f64, ReportError> {
    volumes
        .get(position)
        .copied()
        .ok_or(ReportError::VolumeNotFound { position })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_is_ignored_and_excluded_entries_do_not_count() {
        let report = lines(&[
            "cavity_id filling_volume volume excluded",
            "0 13.0 12.34 0",
            "1 6.0 5.0 1",
            "2 41.0 40.0 0",
        ]);
        let volumes = true_cavity_volumes(&report).unwrap();
        assert_eq!(volumes, vec![12.34, 40.0]);
        assert_eq!(volume_at(&volumes, 0), Ok(12.34));
        assert_eq!(volume_at(&volumes, 1), Ok(40.0));
    }

    #[test]
    fn position_past_last_true_cavity_is_not_found() {
        let report = lines(&["header", "0 12.34 0", "1 5.0 1"]);
        let volumes = true_cavity_volumes(&report).unwrap();
        assert_eq!(
            volume_at(&volumes, 1),
            Err(ReportError::VolumeNotFound { position: 1 })
        );
    }

    #[test]
    fn zero_volume_is_a_legitimate_value_not_a_failure() {
        let report = lines(&["header", "0 0.0 0"]);
        let volumes = true_cavity_volumes(&report).unwrap();
        assert_eq!(volume_at(&volumes, 0), Ok(0.0));
    }

    #[test]
    fn report_with_only_a_header_has_no_cavities() {
        let volumes = true_cavity_volumes(&lines(&["header"])).unwrap();
        assert!(volumes.is_empty());
    }

    #[test]
    fn blank_entry_lines_are_skipped() {
        let report = lines(&["header", "", "0 7.5 0", "   "]);
        let volumes = true_cavity_volumes(&report).unwrap();
        assert_eq!(volumes, vec![7.5]);
    }

    #[test]
    fn non_integer_indicator_is_rejected() {
        let report = lines(&["header", "0 7.5 maybe"]);
        assert!(matches!(
            true_cavity_volumes(&report),
            Err(ReportError::MalformedEntry { line: 2, .. })
        ));
    }
}
