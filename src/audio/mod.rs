//! WAV decoding using hound.

use crate::error::{Error, Result};
use std::path::Path;

/// Decoded audio data.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Audio samples as mono f32 in range [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl Recording {
    /// Duration of the recording in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Decode a WAV file to mono f32 samples.
///
/// Supports 16/24/32-bit integer and 32-bit float PCM. Multi-channel
/// input is averaged down to mono.
pub fn decode_wav(path: &Path) -> Result<Recording> {
    let mut reader = hound::WavReader::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = usize::from(spec.channels);

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => collect_samples(path, reader.samples::<i16>(), |s| {
            f32::from(s) / 32768.0
        })?,
        #[allow(clippy::cast_precision_loss)]
        (hound::SampleFormat::Int, 24) => collect_samples(path, reader.samples::<i32>(), |s| {
            s as f32 / 8_388_608.0
        })?,
        #[allow(clippy::cast_precision_loss)]
        (hound::SampleFormat::Int, 32) => collect_samples(path, reader.samples::<i32>(), |s| {
            s as f32 / 2_147_483_648.0
        })?,
        (hound::SampleFormat::Float, 32) => collect_samples(path, reader.samples::<f32>(), |s| s)?,
        (format, bits) => {
            return Err(Error::UnsupportedWavFormat {
                path: path.to_path_buf(),
                format: format!("{format:?} {bits}-bit"),
            });
        }
    };

    // Mix down to mono
    let samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    } else {
        samples
    };

    Ok(Recording {
        samples,
        sample_rate,
    })
}

fn collect_samples<S, F>(
    path: &Path,
    iter: impl Iterator<Item = hound::Result<S>>,
    convert: F,
) -> Result<Vec<f32>>
where
    F: Fn(S) -> f32,
{
    iter.map(|s| {
        s.map(&convert).map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: e,
        })
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_wav_i16(path: &Path, channels: u16, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn decode_mono_i16_normalizes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mono.wav");
        write_wav_i16(&path, 1, &[0, 16384, -16384]);

        let rec = decode_wav(&path).unwrap();
        assert_eq!(rec.sample_rate, 8000);
        assert_eq!(rec.samples.len(), 3);
        assert_eq!(rec.samples[0], 0.0);
        assert!((rec.samples[1] - 0.5).abs() < 1e-4);
        assert!((rec.samples[2] + 0.5).abs() < 1e-4);
    }

    #[test]
    fn decode_stereo_averages_to_mono() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("stereo.wav");
        // Two frames: (0.5, -0.5) -> 0.0 and (0.5, 0.5) -> 0.5
        write_wav_i16(&path, 2, &[16384, -16384, 16384, 16384]);

        let rec = decode_wav(&path).unwrap();
        assert_eq!(rec.samples.len(), 2);
        assert!(rec.samples[0].abs() < 1e-4);
        assert!((rec.samples[1] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn decode_missing_file_errors() {
        let err = decode_wav(Path::new("/nonexistent/file.wav")).unwrap_err();
        assert!(err.to_string().contains("failed to open audio file"));
    }

    #[test]
    fn duration_from_rate_and_length() {
        let rec = Recording {
            samples: vec![0.0; 16000],
            sample_rate: 8000,
        };
        assert_eq!(rec.duration_secs(), 2.0);
    }
}
