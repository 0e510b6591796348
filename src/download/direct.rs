//! Direct image download strategy.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::fs::filename_from_url;
use crate::net::Fetched;

/// Write size for streaming bodies to disk.
const CHUNK_SIZE: usize = 8192;

/// Minimum body size to show a progress bar (5 MB).
const PROGRESS_THRESHOLD: usize = 5 * 1024 * 1024;

/// Write a fetched image into the destination directory.
///
/// The filename is the final resolved URL's path basename; an existing
/// file of the same name is overwritten.
pub async fn download_image(fetched: &Fetched, destination: &Path) -> Result<PathBuf> {
    let filename = filename_from_url(&fetched.final_url).ok_or_else(|| {
        Error::Download(format!("No filename in URL: {}", fetched.final_url))
    })?;
    let output_path = destination.join(&filename);

    let progress = if fetched.body.len() > PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(fetched.body.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut file = File::create(&output_path).await?;
    let mut written: u64 = 0;

    for chunk in fetched.body.chunks(CHUNK_SIZE) {
        file.write_all(chunk).await?;
        written += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(written);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(output_path)
}
