//! Album archive download strategy.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::net::Fetched;

/// Expand a fetched album archive into the destination directory.
///
/// Archive entries keep their internal filenames; entries with unsafe
/// paths are skipped. Extraction runs on a blocking task since the zip
/// reader is synchronous.
pub async fn download_album(fetched: &Fetched, destination: &Path) -> Result<()> {
    let destination = destination.to_path_buf();
    let body = fetched.body.clone();

    let extracted = tokio::task::spawn_blocking(move || extract_archive(&body, &destination))
        .await
        .map_err(|e| Error::Archive(format!("Extraction task failed: {}", e)))??;

    tracing::debug!("Extracted {} file(s) from album archive", extracted);

    Ok(())
}

fn extract_archive(body: &[u8], destination: &Path) -> Result<u64> {
    let mut archive = ZipArchive::new(Cursor::new(body))
        .map_err(|e| Error::Archive(format!("Could not read archive: {}", e)))?;

    let mut extracted: u64 = 0;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| Error::Archive(format!("Could not read archive entry: {}", e)))?;

        let Some(relative) = entry.enclosed_name().map(PathBuf::from) else {
            tracing::warn!("Skipping archive entry with unsafe path: {}", entry.name());
            continue;
        };
        let path = destination.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&path)?;
            continue;
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut outfile = std::fs::File::create(&path)?;
        std::io::copy(&mut entry, &mut outfile)?;
        extracted += 1;
    }

    Ok(extracted)
}

/// Build an in-memory zip archive from (name, body) pairs.
#[cfg(test)]
pub(crate) fn make_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use std::io::Write;

    use zip::write::FileOptions;
    use zip::ZipWriter;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(body).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(body: Vec<u8>) -> Fetched {
        Fetched {
            final_url: "http://imgur.com/a/XYZ/zip".to_string(),
            body,
        }
    }

    #[tokio::test]
    async fn test_expands_archive_preserving_names() {
        let dir = tempfile::tempdir().unwrap();
        let body = make_zip(&[("one.jpg", b"first"), ("two.png", b"second")]);

        download_album(&fetched(body), dir.path()).await.unwrap();

        assert_eq!(std::fs::read(dir.path().join("one.jpg")).unwrap(), b"first");
        assert_eq!(std::fs::read(dir.path().join("two.png")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_expands_nested_entries() {
        let dir = tempfile::tempdir().unwrap();
        let body = make_zip(&[("album/one.jpg", b"first")]);

        download_album(&fetched(body), dir.path()).await.unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("album/one.jpg")).unwrap(),
            b"first"
        );
    }

    #[tokio::test]
    async fn test_rejects_non_archive_body() {
        let dir = tempfile::tempdir().unwrap();

        let result = download_album(&fetched(b"not a zip".to_vec()), dir.path()).await;

        assert!(matches!(result, Err(Error::Archive(_))));
    }
}
