//! Mel spectrogram computation.
//!
//! Hann-windowed STFT via rustfft, a triangular mel filterbank applied
//! to the power spectrum, and a decibel conversion referenced to the
//! spectrogram peak for display.

use crate::constants::spectral::{HOP_LENGTH, N_FFT, N_MELS, TOP_DB};
use ndarray::Array2;
use rustfft::{num_complex::Complex, FftPlanner};
use std::f32::consts::PI;

/// Mel spectrogram of a recording, in decibels relative to peak power.
///
/// Shape is `(N_MELS, num_frames)`; values lie in `[-TOP_DB, 0]`.
/// Recordings shorter than one FFT window produce zero frames.
pub fn mel_spectrogram_db(samples: &[f32], sample_rate: u32) -> Array2<f32> {
    let power = power_spectrogram(samples);
    let filterbank = mel_filterbank(N_MELS, N_FFT, sample_rate as f32);

    // (n_mels, freqs) x (freqs, frames) -> (n_mels, frames)
    let mel = filterbank.dot(&power);
    power_to_db(&mel)
}

/// Power spectrogram, shape `(N_FFT / 2 + 1, num_frames)`.
fn power_spectrogram(samples: &[f32]) -> Array2<f32> {
    let num_frames = if samples.len() < N_FFT {
        0
    } else {
        (samples.len() - N_FFT) / HOP_LENGTH + 1
    };
    let n_bins = N_FFT / 2 + 1;
    let mut power = Array2::zeros((n_bins, num_frames));

    let window = hann_window(N_FFT);
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(N_FFT);

    let mut buffer: Vec<Complex<f32>> = vec![Complex::new(0.0, 0.0); N_FFT];
    for frame_idx in 0..num_frames {
        let start = frame_idx * HOP_LENGTH;
        for i in 0..N_FFT {
            buffer[i] = Complex::new(samples[start + i] * window[i], 0.0);
        }

        fft.process(&mut buffer);

        for (bin, value) in buffer.iter().take(n_bins).enumerate() {
            power[[bin, frame_idx]] = value.norm_sqr();
        }
    }

    power
}

/// Convert a power matrix to decibels referenced to its peak value,
/// floored at `-TOP_DB`.
fn power_to_db(power: &Array2<f32>) -> Array2<f32> {
    let reference = power.iter().copied().fold(1e-10_f32, f32::max);

    power.mapv(|p| {
        let db = 10.0 * (p.max(1e-10) / reference).log10();
        db.max(-TOP_DB)
    })
}

/// Triangular mel filterbank, shape `(n_mels, n_fft / 2 + 1)`.
fn mel_filterbank(n_mels: usize, n_fft: usize, sample_rate: f32) -> Array2<f32> {
    let n_bins = n_fft / 2 + 1;
    let mut filterbank = Array2::zeros((n_mels, n_bins));

    let mel_low = hz_to_mel(0.0);
    let mel_high = hz_to_mel(sample_rate / 2.0);

    // n_mels + 2 equally spaced points on the mel scale, mapped back
    // to FFT bin indices.
    #[allow(clippy::cast_precision_loss)]
    let bin_points: Vec<f32> = (0..n_mels + 2)
        .map(|i| {
            let mel = mel_low + (mel_high - mel_low) * i as f32 / (n_mels + 1) as f32;
            mel_to_hz(mel) * n_fft as f32 / sample_rate
        })
        .collect();

    for m in 0..n_mels {
        let (left, center, right) = (bin_points[m], bin_points[m + 1], bin_points[m + 2]);
        for bin in 0..n_bins {
            #[allow(clippy::cast_precision_loss)]
            let f = bin as f32;
            let weight = if f > left && f < center {
                (f - left) / (center - left)
            } else if (f - center).abs() < f32::EPSILON {
                1.0
            } else if f > center && f < right {
                (right - f) / (right - center)
            } else {
                0.0
            };
            filterbank[[m, bin]] = weight;
        }
    }

    filterbank
}

#[allow(clippy::cast_precision_loss)]
fn hann_window(window_length: usize) -> Vec<f32> {
    (0..window_length)
        .map(|n| {
            let factor = 2.0 * PI * n as f32 / (window_length - 1) as f32;
            0.5 * (1.0 - factor.cos())
        })
        .collect()
}

fn hz_to_mel(hz: f32) -> f32 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

fn mel_to_hz(mel: f32) -> f32 {
    700.0 * (10.0_f32.powf(mel / 2595.0) - 1.0)
}
