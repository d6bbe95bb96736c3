//! Streamed dataset download with a progress bar.

use crate::error::{Error, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Download a single file, streaming it to disk with a progress bar.
pub async fn download_file(client: &Client, url: &str, dest: &Path) -> Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

    if !response.status().is_success() {
        return Err(Error::DownloadFailed {
            url: url.to_string(),
            source: format!("HTTP {}", response.status()).into(),
        });
    }

    let pb = download_progress(response.content_length().unwrap_or(0), dest)?;

    let mut file = File::create(dest).await.map_err(Error::Io)?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        file.write_all(&chunk).await.map_err(Error::Io)?;
        pb.inc(chunk.len() as u64);
    }

    file.flush().await.map_err(Error::Io)?;
    pb.finish_with_message("Archive saved");

    Ok(())
}

fn download_progress(total_size: u64, dest: &Path) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{bar:40.cyan/blue} {percent}% ({bytes}/{total_bytes})")
            .map_err(|e| Error::Internal {
                message: format!("Failed to create progress bar: {e}"),
            })?
            .progress_chars("█▓▒░ "),
    );
    // to_string_lossy() keeps non-UTF-8 filenames from aborting the run
    pb.set_message(format!(
        "Downloading {}...",
        dest.file_name().map_or_else(
            || std::borrow::Cow::Borrowed("archive"),
            |n| n.to_string_lossy()
        )
    ));
    Ok(pb)
}

/// Build the public download URL for a Kaggle dataset id.
pub fn dataset_url(dataset: &str) -> String {
    format!("{}/{dataset}", crate::constants::KAGGLE_DOWNLOAD_BASE)
}

/// Archive file name derived from the dataset id slug.
pub fn archive_name(dataset: &str) -> String {
    let slug = dataset.rsplit('/').next().unwrap_or(dataset);
    format!("{slug}.zip")
}
