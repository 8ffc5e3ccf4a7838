/// Candidates below this confidence are discarded before scoring.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Luminance difference (0-255 scale) below which a region is a contrast error.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 100.0;

/// Pixels added on each side of a text box when sampling its background.
pub const DEFAULT_BACKGROUND_MARGIN: i32 = 5;

/// Frames are downscaled to this width before detection and color sampling.
pub const DEFAULT_SCALE_WIDTH: u32 = 450;

/// Default analysis sampling rate in frames per second.
pub const DEFAULT_TARGET_FRAME_RATE: f64 = 3.0;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
