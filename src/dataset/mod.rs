//! Dataset acquisition: download the archive and extract it in place.

mod archive;
mod download;

pub use archive::{find_archive, unzip_to_dir};
pub use download::{archive_name, dataset_url, download_file};

use crate::error::{Error, Result};
use reqwest::Client;
use std::path::Path;
use tracing::info;

/// Fetch a dataset: create the target directory, download the archive,
/// locate it, and extract it in place.
///
/// The archive-existence check after the download is the fatal gate:
/// if no zip landed in the directory the whole run fails.
pub fn fetch_dataset(dataset: &str, data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir).map_err(|e| Error::DirCreate {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    info!("Downloading dataset '{dataset}' into {}", data_dir.display());

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    runtime.block_on(async {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .timeout(std::time::Duration::from_secs(600))
            .build()
            .map_err(|e| Error::Internal {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        let dest = data_dir.join(archive_name(dataset));
        download_file(&client, &dataset_url(dataset), &dest).await
    })?;

    let zip_path = find_archive(data_dir)?;
    info!("Extracting {}", zip_path.display());
    unzip_to_dir(&zip_path, data_dir)?;

    println!("Dataset ready in: {}", data_dir.display());
    Ok(())
}
