//! Data models for WebCAT sampling
//!
//! This module contains the resource key identifying one archive video and
//! the manifest row describing one extracted frame. Both the canonical name
//! and the archive URL are pure functions of the key.

use serde::{Deserialize, Serialize};

use crate::constants::WEBCAT_VIDEO_HOST;

// =============================================================================
// Resource Key
// =============================================================================

/// Identifies one remote WebCAT video by station, date and time
///
/// The archive stores one video per station per ten-minute time step, e.g.
/// `("buxtoncoastalcam", 2019, 11, 13, 1000)` is the Buxton camera's video
/// from 10:00 on 13 November 2019. Keys are plain values; validity of the
/// remote resource is only established by probing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Station identifier, e.g. "buxtoncoastalcam"
    pub station: String,

    /// Year of the video, e.g. 2019
    pub year: i32,

    /// Month of the video (1-12)
    pub month: u32,

    /// Day of the video (1-31)
    pub day: u32,

    /// Time of the video on a 24h clock rounded to ten minutes,
    /// e.g. 500 (5:00 am), 1330 (1:30 pm)
    pub time: u32,
}

impl ResourceKey {
    /// Create a new resource key. No validation is performed here; range
    /// checks belong to the CLI boundary and remote validity to the prober.
    pub fn new(station: impl Into<String>, year: i32, month: u32, day: u32, time: u32) -> Self {
        Self {
            station: station.into(),
            year,
            month,
            day,
            time,
        }
    }

    /// Canonical name of the key, used for output directories and the
    /// manifest file name.
    ///
    /// The components stay unpadded here (`buxtoncoastalcam_2019_11_13_1000`,
    /// but also `somecam_2019_1_3_500`), unlike in [`ResourceKey::url`].
    /// Downstream consumers depend on the unpadded form; keep the asymmetry.
    pub fn name(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.station, self.year, self.month, self.day, self.time
        )
    }

    /// Remote locator of the video in the WebCAT archive
    ///
    /// Month and day are zero-padded to two digits and the time to four,
    /// matching the archive's fixed path template.
    pub fn url(&self) -> String {
        format!(
            "{host}/{station}/raw/{year}/{year}_{month:02}/{year}_{month:02}_{day:02}/{station}.{year}-{month:02}-{day:02}_{time:04}.mp4",
            host = WEBCAT_VIDEO_HOST,
            station = self.station,
            year = self.year,
            month = self.month,
            day = self.day,
            time = self.time,
        )
    }
}

// =============================================================================
// Sample Manifest
// =============================================================================

/// One extracted frame, as recorded in the per-video CSV manifest
///
/// Field order matches the manifest column order: url, name, frame, path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleManifestRow {
    /// Archive URL the frame was extracted from
    pub url: String,

    /// Canonical name of the source key
    pub name: String,

    /// Zero-based frame index within the video
    pub frame: i64,

    /// Path of the written image file
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_matches_archive_template() {
        let key = ResourceKey::new("buxtoncoastalcam", 2019, 11, 13, 1000);
        assert_eq!(
            key.url(),
            "http://webcat-video.axds.co/buxtoncoastalcam/raw/2019/2019_11/2019_11_13/buxtoncoastalcam.2019-11-13_1000.mp4"
        );
    }

    #[test]
    fn test_url_zero_pads_month_day_and_time() {
        let key = ResourceKey::new("northinletcam", 2020, 1, 3, 500);
        assert_eq!(
            key.url(),
            "http://webcat-video.axds.co/northinletcam/raw/2020/2020_01/2020_01_03/northinletcam.2020-01-03_0500.mp4"
        );
    }

    #[test]
    fn test_name_stays_unpadded() {
        // The name intentionally keeps the raw input formatting even where
        // the URL pads; both forms must come from the same key unchanged.
        let key = ResourceKey::new("northinletcam", 2020, 1, 3, 500);
        assert_eq!(key.name(), "northinletcam_2020_1_3_500");

        let key = ResourceKey::new("buxtoncoastalcam", 2019, 11, 13, 1000);
        assert_eq!(key.name(), "buxtoncoastalcam_2019_11_13_1000");
    }

    #[test]
    fn test_name_and_url_are_deterministic() {
        let key = ResourceKey::new("follypiernorthcam", 2021, 6, 7, 1230);
        assert_eq!(key.url(), key.url());
        assert_eq!(key.name(), key.name());
    }

    #[test]
    fn test_keys_compare_by_value() {
        let a = ResourceKey::new("miami40thcam", 2019, 2, 28, 900);
        let b = ResourceKey::new("miami40thcam", 2019, 2, 28, 900);
        assert_eq!(a, b);
        assert_ne!(a, ResourceKey::new("miami40thcam", 2019, 2, 28, 910));
    }
}
