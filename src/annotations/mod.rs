//! Annotation-interval extraction.
//!
//! Annotation files are CSVs with `start` and `end` columns giving the
//! time span of each bowel-sound event in seconds. Extra columns are
//! ignored. Uses the `csv` crate for robust parsing.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Internal record for CSV deserialization. Either bound may be empty
/// in the source data.
#[derive(Debug, Deserialize)]
struct AnnotationRecord {
    start: Option<f64>,
    end: Option<f64>,
}

/// A labeled time span within a recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

/// Read annotation intervals from a CSV file.
///
/// Rows missing `start` or `end` are silently dropped; surviving rows
/// keep their file order. Overlapping or unsorted intervals are
/// returned as-is.
///
/// A missing file is not an error: it yields an empty list, matching
/// the convention that an unannotated recording simply has no events.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be parsed as
/// CSV with the expected columns.
pub fn read_intervals(path: &Path) -> Result<Vec<Interval>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::AnnotationParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut intervals = Vec::new();

    for result in reader.deserialize::<AnnotationRecord>() {
        let record = result.map_err(|e| Error::AnnotationParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let (Some(start), Some(end)) = (record.start, record.end) {
            intervals.push(Interval { start, end });
        }
    }

    Ok(intervals)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn drops_rows_missing_either_bound() {
        let csv_content = "start,end,category\n1.0,2.0,b\n,3.0,b\n4.0,5.0,v\n6.0,,b\n";

        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(csv_content.as_bytes()).unwrap();
        file.flush().unwrap();

        let intervals = read_intervals(file.path()).unwrap();
        assert_eq!(
            intervals,
            vec![
                Interval { start: 1.0, end: 2.0 },
                Interval { start: 4.0, end: 5.0 },
            ]
        );
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let intervals = read_intervals(Path::new("/nonexistent/annotations.csv")).unwrap();
        assert!(intervals.is_empty());
    }

    #[test]
    fn preserves_unsorted_and_overlapping_rows() {
        let csv_content = "start,end\n5.0,6.0\n1.0,4.0\n2.0,3.0\n";

        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(csv_content.as_bytes()).unwrap();
        file.flush().unwrap();

        let intervals = read_intervals(file.path()).unwrap();
        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].start, 5.0);
        assert_eq!(intervals[1].start, 1.0);
    }

    #[test]
    fn header_only_file_yields_empty_list() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(b"start,end\n").unwrap();
        file.flush().unwrap();

        assert!(read_intervals(file.path()).unwrap().is_empty());
    }

    #[test]
    fn malformed_file_errors() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(b"start,end\nnot-a-number,2.0\n").unwrap();
        file.flush().unwrap();

        assert!(read_intervals(file.path()).is_err());
    }
}
