//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used in user-facing messages.
pub const APP_NAME: &str = "bowelscope";

/// Kaggle dataset identifier (owner/slug) fetched by the `fetch` command.
pub const DATASET_ID: &str = "robertnowak/bowel-sounds";

/// Default directory the dataset archive is downloaded into.
pub const DEFAULT_DATA_DIR: &str = "bowel_dataset";

/// Default directory holding the extracted `.wav`/`.csv` pairs.
pub const DEFAULT_AUDIO_DIR: &str = "bowel_dataset/data";

/// Default directory rendered figures are written into.
pub const DEFAULT_PLOT_DIR: &str = "plots";

/// Kaggle public download endpoint; the dataset id is appended.
pub const KAGGLE_DOWNLOAD_BASE: &str = "https://www.kaggle.com/api/v1/datasets/download";

/// Number of preview examples used when the prompt input is invalid
/// or out of range.
pub const DEFAULT_PREVIEW_COUNT: usize = 3;

/// Mean-absolute-amplitude cutoff below which a recording is flagged
/// as a likely "no sound" candidate.
pub const LOW_AMPLITUDE_THRESHOLD: f32 = 0.01;

/// Number of quietest candidates listed in the low-amplitude report.
pub const QUIET_REPORT_COUNT: usize = 5;

/// Number of file names echoed when listing the data directory.
pub const LISTING_PREVIEW_COUNT: usize = 20;

/// Number of annotation rows echoed when previewing a CSV file.
pub const CSV_HEAD_ROWS: usize = 5;

/// Spectral analysis parameters for the mel spectrogram panel.
pub mod spectral {
    /// Number of mel bands.
    pub const N_MELS: usize = 40;

    /// FFT window size in samples.
    pub const N_FFT: usize = 1024;

    /// Hop between successive FFT frames in samples.
    pub const HOP_LENGTH: usize = 512;

    /// Floor applied when converting power to decibels, matching the
    /// 80 dB dynamic range commonly used for display.
    pub const TOP_DB: f32 = 80.0;
}

/// Rendered figure dimensions in pixels.
pub mod figure {
    /// Figure width.
    pub const WIDTH: u32 = 1400;

    /// Figure height (both panels combined).
    pub const HEIGHT: u32 = 900;
}
