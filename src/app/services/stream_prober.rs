//! Remote stream probing
//!
//! Opens an archive URL as a seekable, decodable video stream and validates
//! it before any frame work starts. The archive transport gives no distinct
//! "not found" signal; a stream reporting zero total frames is the only
//! indication that a key does not exist remotely.

use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio;
use tracing::debug;

use crate::app::models::ResourceKey;
use crate::{Error, Result};

/// An open, validated video stream
///
/// The stream properties are queried lazily from the underlying capture on
/// every call rather than cached at open time.
pub struct VideoHandle {
    url: String,
    capture: videoio::VideoCapture,
}

impl VideoHandle {
    /// Open `url` as a video stream and validate it has at least one frame.
    ///
    /// A single probe attempt, no retries. Callers that want to retry on
    /// transient failures must loop externally.
    fn open(url: &str) -> Result<Self> {
        // CAP_ANY lets OpenCV pick a backend; remote mp4 URLs resolve to
        // the FFmpeg backend on all supported platforms.
        let capture = videoio::VideoCapture::from_file(url, videoio::CAP_ANY)?;

        let handle = Self {
            url: url.to_string(),
            capture,
        };

        if !handle.capture.is_opened()? || handle.total_frames()? == 0 {
            return Err(Error::invalid_resource(url));
        }

        Ok(handle)
    }

    /// URL the stream was opened from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Width of the video frames in pixels
    pub fn width(&self) -> Result<i64> {
        self.prop(videoio::CAP_PROP_FRAME_WIDTH)
    }

    /// Height of the video frames in pixels
    pub fn height(&self) -> Result<i64> {
        self.prop(videoio::CAP_PROP_FRAME_HEIGHT)
    }

    /// Total number of frames in the video
    pub fn total_frames(&self) -> Result<i64> {
        self.prop(videoio::CAP_PROP_FRAME_COUNT)
    }

    /// Frames per second, truncated to a whole number
    pub fn fps(&self) -> Result<i64> {
        self.prop(videoio::CAP_PROP_FPS)
    }

    fn prop(&self, prop_id: i32) -> Result<i64> {
        Ok(self.capture.get(prop_id)? as i64)
    }

    /// Seek to `frame_index` and decode exactly one frame
    pub(crate) fn seek_and_decode(&mut self, frame_index: i64) -> Result<Mat> {
        self.capture
            .set(videoio::CAP_PROP_POS_FRAMES, frame_index as f64)?;

        let mut frame = Mat::default();
        let grabbed = self.capture.read(&mut frame)?;
        if !grabbed || frame.empty() {
            return Err(Error::frame_decode(frame_index));
        }

        Ok(frame)
    }
}

/// Holds at most one open `(ResourceKey, VideoHandle)` pair
///
/// Re-probing through [`Session::generate`] releases the previously held
/// stream before the next one is opened, so two streams never coexist. A
/// failed probe leaves the session empty.
#[derive(Default)]
pub struct Session {
    current: Option<(ResourceKey, VideoHandle)>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the archive for `key` and make its stream the session's
    /// current one.
    pub fn generate(&mut self, key: ResourceKey) -> Result<&mut VideoHandle> {
        // Release the prior stream first; only one may be open at a time.
        self.current = None;

        let url = key.url();
        let handle = VideoHandle::open(&url)?;
        debug!("Opened {} ({} frames)", url, handle.total_frames()?);

        let (_, handle) = self.current.insert((key, handle));
        Ok(handle)
    }

    /// Key of the currently held stream, if any
    pub fn key(&self) -> Option<&ResourceKey> {
        self.current.as_ref().map(|(key, _)| key)
    }

    /// Mutable access to the currently held stream, if any
    pub fn handle_mut(&mut self) -> Option<&mut VideoHandle> {
        self.current.as_mut().map(|(_, handle)| handle)
    }

    /// Release the currently held stream
    pub fn release(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_empty() {
        let mut session = Session::new();
        assert!(session.key().is_none());
        assert!(session.handle_mut().is_none());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut session = Session::new();
        session.release();
        session.release();
        assert!(session.key().is_none());
    }

    #[test]
    fn test_open_rejects_unreadable_source() {
        // A source that cannot be opened reports zero frames, the same
        // signal an unknown remote key produces.
        let result = VideoHandle::open("/nonexistent/webcat/video.mp4");
        assert!(matches!(result, Err(Error::InvalidResource { .. })));
    }
}
