//! Tests for the low-amplitude scanner.

use std::path::{Path, PathBuf};

use bowelscope::analysis::scan_low_amplitude;
use tempfile::tempdir;

fn write_wav(path: &Path, amplitude: f32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..200 {
        writer.write_sample(amplitude).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_only_file_below_threshold_is_reported() {
    let temp = tempdir().unwrap();
    let file1 = temp.path().join("file1.wav");
    let file2 = temp.path().join("file2.wav");
    let file3 = temp.path().join("file3.wav");
    write_wav(&file1, 0.02);
    write_wav(&file2, 0.005);
    write_wav(&file3, 0.03);

    let files = vec![file1, file2.clone(), file3];
    let result = scan_low_amplitude(&files, 0.01, false).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].file, file2);
    assert!((result[0].mean_amplitude - 0.005).abs() < 1e-6);
}

#[test]
fn test_result_sorted_ascending_by_amplitude() {
    let temp = tempdir().unwrap();
    let mut files = Vec::new();
    for (name, amp) in [("x.wav", 0.009_f32), ("y.wav", 0.001), ("z.wav", 0.004)] {
        let path = temp.path().join(name);
        write_wav(&path, amp);
        files.push(path);
    }

    let result = scan_low_amplitude(&files, 0.01, false).unwrap();

    assert_eq!(result.len(), 3);
    for pair in result.windows(2) {
        assert!(pair[0].mean_amplitude <= pair[1].mean_amplitude);
    }
    assert!(result.iter().all(|c| c.mean_amplitude < 0.01));
}

#[test]
fn test_unreadable_file_aborts_scan() {
    let files = vec![PathBuf::from("/nonexistent/rec.wav")];
    assert!(scan_low_amplitude(&files, 0.01, false).is_err());
}

#[test]
fn test_empty_file_set_yields_empty_result() {
    let result = scan_low_amplitude(&[], 0.01, false).unwrap();
    assert!(result.is_empty());
}
