//! Annotated two-panel figure rendering.
//!
//! A rendered figure stacks a waveform panel over a mel spectrogram
//! panel, both on the recording's time axis. Annotation intervals are
//! shaded on the waveform and marked with vertical lines on the
//! spectrogram.

use crate::annotations::{self, Interval};
use crate::audio::{self, Recording};
use crate::constants::figure;
use crate::constants::spectral::{HOP_LENGTH, N_MELS, TOP_DB};
use crate::error::{Error, Result};
use crate::spectral;
use ndarray::Array2;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Keep the waveform line series below this many points.
const MAX_WAVEFORM_POINTS: usize = 8192;

/// Render a recording with its annotation intervals to a PNG figure.
///
/// The annotation file may be absent, in which case zero intervals are
/// drawn; a recording that cannot be decoded is an error.
pub fn render_annotated(wav_path: &Path, csv_path: Option<&Path>, out_path: &Path) -> Result<()> {
    let recording = audio::decode_wav(wav_path)?;
    let intervals = match csv_path {
        Some(path) => annotations::read_intervals(path)?,
        None => Vec::new(),
    };

    render_figure(&recording, &intervals, out_path)?;
    info!(
        "Rendered {} with {} interval(s) to {}",
        wav_path.display(),
        intervals.len(),
        out_path.display()
    );
    Ok(())
}

/// Draw the two-panel figure for an already decoded recording.
pub fn render_figure(
    recording: &Recording,
    intervals: &[Interval],
    out_path: &Path,
) -> Result<()> {
    let duration = f64::from(recording.duration_secs()).max(f64::MIN_POSITIVE);
    let mel_db = spectral::mel_spectrogram_db(&recording.samples, recording.sample_rate);

    let root = BitMapBackend::new(out_path, (figure::WIDTH, figure::HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(out_path, &e))?;
    #[allow(clippy::cast_possible_wrap)]
    let (wave_area, spec_area) = root.split_vertically((figure::HEIGHT / 2) as i32);

    draw_waveform_panel(&wave_area, recording, intervals, duration, out_path)?;
    draw_spectrogram_panel(&spec_area, &mel_db, recording.sample_rate, intervals, duration, out_path)?;

    root.present().map_err(|e| render_err(out_path, &e))?;
    Ok(())
}

fn draw_waveform_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    recording: &Recording,
    intervals: &[Interval],
    duration: f64,
    out_path: &Path,
) -> Result<()> {
    let caption = format!(
        "Waveform with {} bowel sound intervals annotated",
        intervals.len()
    );

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..duration, -1.1_f64..1.1)
        .map_err(|e| render_err(out_path, &e))?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Amplitude")
        .draw()
        .map_err(|e| render_err(out_path, &e))?;

    // Shaded spans first so the waveform stays visible on top.
    for interval in intervals {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(interval.start, -1.1), (interval.end, 1.1)],
                RGBAColor(255, 165, 0, 0.4).filled(),
            )))
            .map_err(|e| render_err(out_path, &e))?;
    }

    let step = (recording.samples.len() / MAX_WAVEFORM_POINTS).max(1);
    let rate = f64::from(recording.sample_rate);
    let series = recording
        .samples
        .iter()
        .step_by(step)
        .enumerate()
        .map(|(i, &y)| ((i * step) as f64 / rate, f64::from(y)));

    chart
        .draw_series(LineSeries::new(series, &BLUE))
        .map_err(|e| render_err(out_path, &e))?;

    Ok(())
}

fn draw_spectrogram_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    mel_db: &Array2<f32>,
    sample_rate: u32,
    intervals: &[Interval],
    duration: f64,
    out_path: &Path,
) -> Result<()> {
    let num_frames = mel_db.shape()[1];

    let mut chart = ChartBuilder::on(area)
        .caption("Mel Spectrogram", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..duration, 0..N_MELS)
        .map_err(|e| render_err(out_path, &e))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Time (s)")
        .y_desc("Mel band")
        .draw()
        .map_err(|e| render_err(out_path, &e))?;

    let frame_secs = HOP_LENGTH as f64 / f64::from(sample_rate);
    chart
        .draw_series((0..num_frames).flat_map(|frame| {
            let t0 = frame as f64 * frame_secs;
            let t1 = t0 + frame_secs;
            (0..N_MELS).map(move |band| {
                let db = mel_db[[band, frame]];
                let heat = f64::from((db + TOP_DB) / TOP_DB).clamp(0.0, 1.0);
                Rectangle::new(
                    [(t0, band), (t1, band + 1)],
                    HSLColor(0.7 - 0.7 * heat, 0.9, 0.15 + 0.5 * heat).filled(),
                )
            })
        }))
        .map_err(|e| render_err(out_path, &e))?;

    // Interval boundaries as dashed vertical markers.
    for interval in intervals {
        for t in [interval.start, interval.end] {
            chart
                .draw_series(DashedLineSeries::new(
                    [(t, 0), (t, N_MELS)],
                    6,
                    4,
                    RED.stroke_width(1),
                ))
                .map_err(|e| render_err(out_path, &e))?;
        }
    }

    Ok(())
}

fn render_err(path: &Path, e: &impl std::fmt::Display) -> Error {
    Error::PlotRender {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
