//! Tests for the annotation-interval extractor.

use std::io::Write;
use std::path::Path;

use bowelscope::annotations::{read_intervals, Interval};
use tempfile::NamedTempFile;

#[test]
fn test_drops_row_with_missing_start() {
    let csv_content = "start,end\n1.0,2.0\n,3.0\n4.0,5.0\n";

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
fn test_extra_columns_are_ignored() {
    let csv_content = "start,end,category,fmin,fmax\n0.5,0.9,sb,120,400\n";

    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(csv_content.as_bytes()).unwrap();
    file.flush().unwrap();

    let intervals = read_intervals(file.path()).unwrap();
    assert_eq!(intervals, vec![Interval { start: 0.5, end: 0.9 }]);
}

#[test]
fn test_missing_file_is_not_an_error() {
    let intervals = read_intervals(Path::new("/definitely/not/here.csv")).unwrap();
    assert!(intervals.is_empty());
}

#[test]
fn test_existing_unparseable_file_is_an_error() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(b"start,end\n1.0\n").unwrap();
    file.flush().unwrap();

    assert!(read_intervals(file.path()).is_err());
}

#[test]
fn test_row_order_is_preserved() {
    let csv_content = "start,end\n9.0,9.5\n0.5,8.0\n3.0,4.0\n";

    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(csv_content.as_bytes()).unwrap();
    file.flush().unwrap();

    let intervals = read_intervals(file.path()).unwrap();
    let starts: Vec<f64> = intervals.iter().map(|i| i.start).collect();
    assert_eq!(starts, vec![9.0, 0.5, 3.0]);
}
