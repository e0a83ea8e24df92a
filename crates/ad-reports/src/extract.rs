//! Revenue column extraction from partner report CSVs.

use revbatch_core::error::SourceError;

/// Pulls one numeric column out of a raw CSV report body.
///
/// The header row is skipped. Cells that do not parse as a number
/// contribute `0.0` rather than failing the series; the reports are
/// noisy third-party output and a blank or `N/A` cell is routine.
/// A structurally broken body (bad CSV, rows missing the column) is
/// an error so the caller can apply its degraded-series policy.
///
/// # Errors
/// Returns a decode error if the body is not valid CSV or a data row
/// does not carry the requested column.
pub fn extract_column(body: &[u8], column: usize) -> Result<Vec<f64>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let mut samples = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SourceError::decode(format!("invalid CSV row: {e}")))?;
        let cell = row.get(column).ok_or_else(|| {
            SourceError::decode(format!(
                "row has {} columns, expected column {column}",
                row.len()
            ))
        })?;
        samples.push(cell.trim().parse().unwrap_or(0.0));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
a,b,c
ios,2021-06-11,1.5
ios,2021-06-11,2.25
ios,2021-06-11,0.75
";

    #[test]
    fn extracts_the_requested_column() {
        let samples = extract_column(REPORT.as_bytes(), 2).unwrap();
        assert_eq!(samples, vec![1.5, 2.25, 0.75]);
    }

    #[test]
    fn header_row_is_not_a_sample() {
        let samples = extract_column("rev\n3.0\n".as_bytes(), 0).unwrap();
        assert_eq!(samples, vec![3.0]);
    }

    #[test]
    fn unparseable_cells_contribute_zero() {
        let samples = extract_column("a,rev\nx,N/A\ny,2.0\n".as_bytes(), 1).unwrap();
        assert_eq!(samples, vec![0.0, 2.0]);
    }

    #[test]
    fn header_only_report_yields_empty_series() {
        let samples = extract_column("a,b,c\n".as_bytes(), 2).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn row_missing_the_column_is_an_error() {
        let err = extract_column("a,b,c\nonly-one-cell\n".as_bytes(), 2).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn negative_samples_pass_through() {
        let samples = extract_column("rev\n-4.5\n".as_bytes(), 0).unwrap();
        assert_eq!(samples, vec![-4.5]);
    }
}
