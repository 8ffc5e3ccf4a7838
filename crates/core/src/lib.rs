//! Contrast-error analysis for text overlaid on video and image frames.
//!
//! The pipeline samples frames from a media source, asks an injected
//! text localizer for candidate regions, and scores each region's
//! luminance contrast against its immediate background.

pub mod analysis;
pub mod detection;
pub mod pipeline;
pub mod shared;
pub mod video;
