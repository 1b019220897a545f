//! Fixed-interval frame extraction
//!
//! Walks a validated video stream at a fixed time interval, decodes one
//! frame per sample index and writes it as a JPEG file, optionally emitting
//! a CSV manifest describing every sample.

use indicatif::{ProgressBar, ProgressStyle};
use opencv::core::Vector;
use opencv::imgcodecs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::models::{ResourceKey, SampleManifestRow};
use crate::app::services::stream_prober::VideoHandle;
use crate::constants::{FRAME_DIR_NAME, FRAME_IMAGE_EXT};
use crate::{Error, Result};

/// Compute the frame indices sampled every `delta_secs` seconds
///
/// The interval must be strictly less than the video duration in whole
/// seconds (`total_frames / fps`, floor division), which guarantees at
/// least two distinct samples. Indices run `0, step, 2*step, ...` up to
/// and including `total_frames`, with `step = delta_secs * fps`. Existing
/// consumers rely on this exact arithmetic; do not change the inequality
/// or the inclusive upper bound.
pub fn sample_indices(total_frames: i64, fps: i64, delta_secs: i64) -> Result<Vec<i64>> {
    let duration_secs = if fps > 0 { total_frames / fps } else { 0 };
    if delta_secs < 1 || delta_secs >= duration_secs {
        return Err(Error::invalid_interval(delta_secs, duration_secs));
    }

    let step = delta_secs * fps;
    Ok((0..=total_frames).step_by(step as usize).collect())
}

/// Extract frames from `handle` every `delta_secs` seconds into
/// `out_dir/jpg/`, returning one manifest row per sample.
///
/// The image subdirectory is deleted and recreated on every run, so a
/// re-run replaces the previous frames instead of merging with them. When
/// `write_manifest` is set, `out_dir/<name>.csv` is (re)written with one
/// row per sample.
///
/// Decode failures are not masked: the first frame that cannot be decoded
/// after its seek aborts the extraction with the failing index.
pub fn save_frames(
    handle: &mut VideoHandle,
    key: &ResourceKey,
    delta_secs: i64,
    out_dir: &Path,
    write_manifest: bool,
    show_progress: bool,
) -> Result<Vec<SampleManifestRow>> {
    let total_frames = handle.total_frames()?;
    let fps = handle.fps()?;
    let indices = sample_indices(total_frames, fps, delta_secs)?;

    debug!(
        "Sampling {} of {} frames at {} fps (step {}s)",
        indices.len(),
        total_frames,
        fps,
        delta_secs
    );

    let frame_dir = out_dir.join(FRAME_DIR_NAME);
    if frame_dir.exists() {
        // Replace, never merge: stale frames from a previous run must not
        // survive next to a new sampling.
        fs::remove_dir_all(&frame_dir).map_err(|e| {
            Error::io(
                format!("failed to clear frame directory '{}'", frame_dir.display()),
                e,
            )
        })?;
    }
    fs::create_dir_all(&frame_dir).map_err(|e| {
        Error::io(
            format!(
                "failed to create frame directory '{}'",
                frame_dir.display()
            ),
            e,
        )
    })?;

    let progress = show_progress.then(|| create_sampling_progress_bar(indices.len() as u64));

    let url = key.url();
    let name = key.name();
    let mut rows = Vec::with_capacity(indices.len());

    for &frame_index in &indices {
        let frame = handle.seek_and_decode(frame_index)?;

        let frame_path = frame_dir.join(format!("frame_{}.{}", frame_index, FRAME_IMAGE_EXT));
        let written = imgcodecs::imwrite(
            frame_path.to_string_lossy().as_ref(),
            &frame,
            &Vector::new(),
        )?;
        if !written {
            return Err(Error::io_message(format!(
                "failed to write frame image '{}'",
                frame_path.display()
            )));
        }

        rows.push(SampleManifestRow {
            url: url.clone(),
            name: name.clone(),
            frame: frame_index,
            path: frame_path.display().to_string(),
        });

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    if write_manifest {
        let manifest_path = write_manifest_file(out_dir, &name, &rows)?;
        debug!("Wrote manifest {}", manifest_path.display());
    }

    Ok(rows)
}

/// Write the CSV manifest for one sampled video
///
/// The file is named from the canonical key name and truncates any prior
/// manifest of the same name, so repeated runs leave exactly one file
/// holding the latest rows.
pub fn write_manifest_file(
    out_dir: &Path,
    name: &str,
    rows: &[SampleManifestRow],
) -> Result<PathBuf> {
    let manifest_path = out_dir.join(format!("{}.csv", name));

    let mut writer = csv::Writer::from_path(&manifest_path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(manifest_path)
}

fn create_sampling_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}
