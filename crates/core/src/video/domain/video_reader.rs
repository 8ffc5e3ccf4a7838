use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Source of decoded frames for analysis.
///
/// Implementations own the container and codec details; the session only
/// sees [`Frame`] values in decode order plus the [`VideoMetadata`] it
/// needs to build a sampling plan. A still image is modeled as a
/// one-frame source with `fps` 0.
pub trait VideoReader: Send {
    /// Opens a media file and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Frames in decode order. An `Err` item means decoding cannot
    /// continue past that point; callers treat it as end of stream.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases decoder and container resources.
    fn close(&mut self);
}
