//! Locating and extracting the downloaded dataset archive.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Find the first zip archive in a directory, lexicographically by name.
///
/// Returns `Error::ArchiveNotFound` naming the directory when no
/// archive is present.
pub fn find_archive(dir: &Path) -> Result<PathBuf> {
    let mut archives: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(OsStr::new("zip")))
        })
        .collect();

    archives.sort();

    archives.into_iter().next().ok_or(Error::ArchiveNotFound {
        dir: dir.to_path_buf(),
    })
}

/// Extract a zip archive into a directory.
///
/// Entries whose names escape the destination directory are skipped.
pub fn unzip_to_dir(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| Error::ArchiveExtract {
        path: zip_path.to_path_buf(),
        source: Box::new(e),
    })?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| Error::ArchiveExtract {
            path: zip_path.to_path_buf(),
            source: Box::new(e),
        })?;

        let outpath = match entry.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => {
                warn!("Skipping archive entry with unsafe name: {}", entry.name());
                continue;
            }
        };

        if entry.name().ends_with('/') {
            std::fs::create_dir_all(&outpath)?;
            continue;
        }
        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Extracting {}", outpath.display());
        let mut outfile = File::create(&outpath)?;
        std::io::copy(&mut entry, &mut outfile)?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (name, data) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn find_archive_returns_first_lexicographic() {
        let temp = tempdir().unwrap();
        write_zip(&temp.path().join("b.zip"), &[("x.txt", b"x")]);
        write_zip(&temp.path().join("a.zip"), &[("x.txt", b"x")]);
        std::fs::write(temp.path().join("notes.txt"), "ignore me").unwrap();

        let found = find_archive(temp.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "a.zip");
    }

    #[test]
    fn find_archive_errors_when_empty() {
        let temp = tempdir().unwrap();
        let err = find_archive(temp.path()).unwrap_err();
        assert!(err.to_string().contains("no zip archive found"));
        assert!(err.to_string().contains(&*temp.path().to_string_lossy()));
    }

    #[test]
    fn unzip_skips_entries_escaping_destination() {
        let temp = tempdir().unwrap();
        let zip_path = temp.path().join("escape.zip");
        write_zip(
            &zip_path,
            &[("../escape.txt", b"outside"), ("data/safe.txt", b"inside")],
        );

        let dest = temp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        unzip_to_dir(&zip_path, &dest).unwrap();

        assert!(dest.join("data/safe.txt").exists());
        assert!(!temp.path().join("escape.txt").exists());
        assert!(!dest.join("escape.txt").exists());
    }

    #[test]
    fn unzip_extracts_nested_entries() {
        let temp = tempdir().unwrap();
        let zip_path = temp.path().join("dataset.zip");
        write_zip(
            &zip_path,
            &[("data/23M74M.wav", b"RIFF"), ("data/23M74M.csv", b"start,end\n")],
        );

        unzip_to_dir(&zip_path, temp.path()).unwrap();

        assert!(temp.path().join("data/23M74M.wav").exists());
        assert!(temp.path().join("data/23M74M.csv").exists());
    }
}
