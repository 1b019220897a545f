//! Archive video download
//!
//! Fetches a whole `.mp4` from the archive with a single blocking GET and
//! streams it to a local file, optionally reporting byte progress.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::{Error, Result};

/// Download `url` to `dest`, returning the number of bytes written
///
/// One attempt, no retries and no timeout; a non-success HTTP status fails
/// the download before any bytes are written.
pub fn download(url: &str, dest: &Path, show_progress: bool) -> Result<u64> {
    debug!("GET {}", url);
    let mut response = reqwest::blocking::get(url)?;

    if !response.status().is_success() {
        return Err(Error::download(
            url,
            format!("HTTP status {}", response.status()),
        ));
    }

    let mut file = File::create(dest)
        .map_err(|e| Error::io(format!("failed to create '{}'", dest.display()), e))?;

    let copied = if show_progress {
        let bar = create_download_progress_bar(response.content_length());
        bar.set_message(format!("Saving to {}", dest.display()));

        let mut writer = bar.wrap_write(&mut file);
        let copied = io::copy(&mut response, &mut writer)?;
        bar.finish();
        copied
    } else {
        io::copy(&mut response, &mut file)?
    };

    info!("Downloaded {} bytes to {}", copied, dest.display());
    Ok(copied)
}

fn create_download_progress_bar(content_length: Option<u64>) -> ProgressBar {
    match content_length {
        Some(length) => {
            let bar = ProgressBar::new(length);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) ETA: {eta}",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            bar
        }
        None => {
            // Length unknown: fall back to a byte counter.
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg} {bytes} ({bytes_per_sec})")
                    .unwrap(),
            );
            bar
        }
    }
}
