use super::ReportError;

/// Parses the cavity atom-index report.
///
/// Each line describes one detected cavity as whitespace-separated 1-based
/// atom serials, referring to the order of the structure's atom records.
/// Serials are converted to 0-based indices here, once, so that every
/// downstream consumer works in the record index space.
///
/// # Errors
///
/// Returns [`ReportError::InvalidAtomSerial`] for a non-integer token or a
/// serial of `0` (which has no 0-based counterpart).
pub fn parse_cavity_atoms(lines: &[String]) -> Result<Vec<Vec<usize>>, ReportError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_cavity_line(line, idx + 1))
        .collect()
}

fn parse_cavity_line(line: &str, line_num: usize) -> Result<Vec<usize>, ReportError> {
    line.split_whitespace()
        .map(|token| {
            let serial: usize = token.parse().map_err(|_| ReportError::InvalidAtomSerial {
                line: line_num,
                value: token.into(),
            })?;
            serial
                .checked_sub(1)
                .ok_or_else(|| ReportError::InvalidAtomSerial {
                    line: line_num,
                    value: token.into(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn converts_serials_to_zero_based_indices() {
        let pockets = parse_cavity_atoms(&lines(&["1 4 9", "2 3"])).unwrap();
        assert_eq!(pockets, vec![vec![0, 3, 8], vec![1, 2]]);
    }

    #[test]
    fn empty_report_yields_no_pockets() {
        let pockets = parse_cavity_atoms(&[]).unwrap();
        assert!(pockets.is_empty());
    }

    #[test]
    fn non_integer_serial_is_rejected() {
        let result = parse_cavity_atoms(&lines(&["1 two 3"]));
        assert_eq!(
            result,
            Err(ReportError::InvalidAtomSerial {
                line: 1,
                value: "two".to_string()
            })
        );
    }

    #[test]
    fn zero_serial_is_rejected() {
        let result = parse_cavity_atoms(&lines(&["3 0"]));
        assert_eq!(
            result,
            Err(ReportError::InvalidAtomSerial {
                line: 1,
                value: "0".to_string()
            })
        );
    }
}
