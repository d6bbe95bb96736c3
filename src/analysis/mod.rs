//! Low-amplitude recording scan.
//!
//! A coarse loudness proxy: recordings whose mean absolute sample
//! value is below a threshold are likely "no sound" captures worth
//! manual review.

use crate::audio;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A recording flagged as a likely-silent candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct QuietCandidate {
    /// Path to the WAV file.
    pub file: PathBuf,
    /// Mean of the absolute sample values.
    pub mean_amplitude: f32,
}

/// Mean of the absolute sample values of a recording.
///
/// An empty or all-zero recording has mean amplitude 0.
#[allow(clippy::cast_precision_loss)]
pub fn mean_abs_amplitude(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.abs()).sum::<f32>() / samples.len() as f32
}

/// Scan WAV files for low mean absolute amplitude.
///
/// Every file is decoded from scratch on each call; nothing is cached.
/// A file is included iff its mean amplitude is strictly below the
/// threshold. The result is sorted ascending by amplitude, quietest
/// first.
///
/// This is the one place the full dataset is decoded, so a progress
/// bar is shown when enabled.
pub fn scan_low_amplitude(
    wav_files: &[PathBuf],
    threshold: f32,
    progress: bool,
) -> Result<Vec<QuietCandidate>> {
    let pb = create_scan_progress(wav_files.len(), progress);

    let mut candidates = Vec::new();
    for path in wav_files {
        let recording = audio::decode_wav(path)?;
        let mean = mean_abs_amplitude(&recording.samples);
        debug!("{}: mean amplitude {mean:.6}", path.display());

        if mean < threshold {
            candidates.push(QuietCandidate {
                file: path.clone(),
                mean_amplitude: mean,
            });
        }
        if let Some(pb) = pb.as_ref() {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    candidates.sort_by(|a, b| a.mean_amplitude.total_cmp(&b.mean_amplitude));
    Ok(candidates)
}

fn create_scan_progress(total_files: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_files == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_files as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files scanned")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Pair a WAV path with its like-named annotation file.
///
/// The link is a filename convention (replace `.wav` with `.csv`), not
/// an enforced relation, so the lookup is explicit: `None` when no
/// such file exists.
pub fn annotation_path_for(wav_path: &Path) -> Option<PathBuf> {
    let csv_path = wav_path.with_extension("csv");
    csv_path.exists().then_some(csv_path)
}
