use std::path::PathBuf;

/// Source properties reported by a reader when a file is opened.
///
/// Images are represented as single-frame videos with `fps = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}
