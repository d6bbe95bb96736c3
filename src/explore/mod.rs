//! Exploration flow: dataset listing, summary statistics, annotated
//! plots, and the low-amplitude report.

use crate::analysis::{self, QuietCandidate};
use crate::cli::ExploreArgs;
use crate::constants::{
    CSV_HEAD_ROWS, DEFAULT_PREVIEW_COUNT, LISTING_PREVIEW_COUNT, LOW_AMPLITUDE_THRESHOLD,
    QUIET_REPORT_COUNT,
};
use crate::error::{Error, Result};
use crate::plot;
use std::ffi::OsStr;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Sorted `.csv` / `.wav` listings of the data directory.
#[derive(Debug)]
pub struct DatasetListing {
    /// Every entry name in the directory, sorted, unrelated files included.
    pub names: Vec<String>,
    /// Annotation files, sorted lexicographically by filename.
    pub csv_files: Vec<PathBuf>,
    /// Audio files, sorted lexicographically by filename.
    pub wav_files: Vec<PathBuf>,
}

/// Run the exploration flow end to end.
pub fn run_explore(args: &ExploreArgs, quiet: bool) -> Result<()> {
    if !args.data_dir.is_dir() {
        return Err(Error::DataDirNotFound {
            path: args.data_dir.clone(),
        });
    }

    let listing = list_dataset(&args.data_dir)?;
    print_listing(&args.data_dir, &listing);

    if listing.wav_files.is_empty() {
        return Err(Error::NoWavFiles {
            dir: args.data_dir.clone(),
        });
    }

    if let Some(first_csv) = listing.csv_files.first() {
        print_csv_preview(first_csv)?;
    }

    std::fs::create_dir_all(&args.out_dir).map_err(|e| Error::DirCreate {
        path: args.out_dir.clone(),
        source: e,
    })?;

    let count = match args.count {
        Some(n) => resolve_preview_count(&n.to_string(), listing.wav_files.len()),
        None => prompt_preview_count(listing.wav_files.len())?,
    };

    for (i, wav_path) in listing.wav_files.iter().take(count).enumerate() {
        let csv_path = analysis::annotation_path_for(wav_path);
        println!(
            "\nPlotting example {}: {} with annotations from {}",
            i + 1,
            display_name(wav_path),
            csv_path
                .as_deref()
                .map_or_else(|| "(none)".to_string(), display_name),
        );
        render_and_open(wav_path, csv_path.as_deref(), &args.out_dir, args.no_open)?;
    }

    report_quiet_files(&listing.wav_files, args, quiet)?;
    Ok(())
}

/// Enumerate the data directory once and partition by extension.
pub fn list_dataset(dir: &Path) -> Result<DatasetListing> {
    let mut names = Vec::new();
    let mut csv_files = Vec::new();
    let mut wav_files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        names.push(display_name(&path));
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => csv_files.push(path),
            Some(ext) if ext.eq_ignore_ascii_case("wav") => wav_files.push(path),
            _ => debug!("Ignoring non-dataset file: {}", path.display()),
        }
    }

    // Filename order is the de facto pairing key next to the stem
    // convention, so both lists sort the same way.
    names.sort();
    csv_files.sort_by_key(|p| p.file_name().map(OsStr::to_os_string));
    wav_files.sort_by_key(|p| p.file_name().map(OsStr::to_os_string));

    Ok(DatasetListing {
        names,
        csv_files,
        wav_files,
    })
}

/// Resolve the preview count from one line of user input.
///
/// Non-numeric input or a value outside `1..=max` falls back to the
/// default of 3 with a printed notice. This is a deliberate UX choice,
/// not an error path.
pub fn resolve_preview_count(input: &str, max: usize) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => n,
        _ => {
            println!(
                "Invalid input, using {DEFAULT_PREVIEW_COUNT} examples by default."
            );
            DEFAULT_PREVIEW_COUNT
        }
    }
}

fn prompt_preview_count(max: usize) -> Result<usize> {
    println!("\nEnter the number of examples to plot (max {max}): ");
    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    Ok(resolve_preview_count(&input, max))
}

fn print_listing(dir: &Path, listing: &DatasetListing) {
    println!("Total files in {}: {}", dir.display(), listing.names.len());

    let head = &listing.names[..listing.names.len().min(LISTING_PREVIEW_COUNT)];
    println!("First {LISTING_PREVIEW_COUNT} files: {head:?}");

    println!("\nTotal CSV files: {}", listing.csv_files.len());
    println!("Total WAV files: {}", listing.wav_files.len());
}

/// Print the head rows, columns, and row count of one annotation file.
/// Diagnostic output only; nothing downstream consumes it.
fn print_csv_preview(path: &Path) -> Result<()> {
    println!("\n--- Sample CSV file exploration ---");
    println!("Exploring CSV file: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| Error::AnnotationParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::AnnotationParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| Error::AnnotationParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        if rows < CSV_HEAD_ROWS {
            println!("  {}", record.iter().collect::<Vec<_>>().join(", "));
        }
        rows += 1;
    }

    println!("Columns: {headers:?}");
    println!("Number of rows: {rows}");
    Ok(())
}

fn render_and_open(
    wav_path: &Path,
    csv_path: Option<&Path>,
    out_dir: &Path,
    no_open: bool,
) -> Result<()> {
    let out_path = figure_path(wav_path, out_dir);
    plot::render_annotated(wav_path, csv_path, &out_path)?;

    if !no_open {
        if let Err(e) = open::that(&out_path) {
            warn!("Could not open {} in a viewer: {e}", out_path.display());
        }
    }
    Ok(())
}

/// Output PNG path for a recording's figure.
pub fn figure_path(wav_path: &Path, out_dir: &Path) -> PathBuf {
    let stem = wav_path.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("figure"),
        |s| s.to_string_lossy(),
    );
    out_dir.join(format!("{stem}.png"))
}

fn report_quiet_files(wav_files: &[PathBuf], args: &ExploreArgs, quiet: bool) -> Result<()> {
    let candidates =
        analysis::scan_low_amplitude(wav_files, LOW_AMPLITUDE_THRESHOLD, !quiet)?;

    println!(
        "\nFound {} low amplitude audio files (possible no sound):",
        candidates.len()
    );
    for QuietCandidate {
        file,
        mean_amplitude,
    } in candidates.iter().take(QUIET_REPORT_COUNT)
    {
        println!("{} - mean amplitude: {mean_amplitude}", display_name(file));
    }

    if let Some(quietest) = candidates.first() {
        println!("\nPlotting one low amplitude audio file with annotations:");
        let csv_path = analysis::annotation_path_for(&quietest.file);
        render_and_open(&quietest.file, csv_path.as_deref(), &args.out_dir, args.no_open)?;
    } else {
        println!(
            "\nNo low amplitude audio files found with threshold = {LOW_AMPLITUDE_THRESHOLD}"
        );
    }
    Ok(())
}

fn display_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map_or_else(|| path.as_ref().display().to_string(), |n| {
            n.to_string_lossy().into_owned()
        })
}
