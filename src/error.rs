//! Error types for bowelscope.

/// Result type alias for bowelscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for bowelscope.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a directory.
    #[error("failed to create directory '{path}'")]
    DirCreate {
        /// Path to the directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Data directory does not exist.
    #[error("data directory does not exist: {path} (run 'bowelscope fetch' first)")]
    DataDirNotFound {
        /// Path to the missing directory.
        path: std::path::PathBuf,
    },

    /// Download failed.
    #[error("failed to download from '{url}'")]
    DownloadFailed {
        /// URL that failed.
        url: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No archive present after the download step.
    #[error("no zip archive found in dataset directory '{dir}'")]
    ArchiveNotFound {
        /// Directory that was searched.
        dir: std::path::PathBuf,
    },

    /// Failed to extract the dataset archive.
    #[error("failed to extract archive '{path}'")]
    ArchiveExtract {
        /// Path to the archive.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No WAV files found in the data directory.
    #[error("no .wav files found in '{dir}'")]
    NoWavFiles {
        /// Directory that was searched.
        dir: std::path::PathBuf,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to decode audio samples.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// WAV sample format is not supported.
    #[error("unsupported WAV format in '{path}': {format}")]
    UnsupportedWavFormat {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Description of the unsupported format.
        format: String,
    },

    /// Failed to parse an annotation file.
    #[error("failed to parse annotation file '{path}'")]
    AnnotationParse {
        /// Path to the annotation file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: csv::Error,
    },

    /// Figure rendering failed.
    #[error("failed to render figure '{path}': {reason}")]
    PlotRender {
        /// Path to the output figure.
        path: std::path::PathBuf,
        /// Description of the rendering failure.
        reason: String,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
