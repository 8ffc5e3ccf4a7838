use crate::analysis::domain::color_sampler::Color;
use crate::shared::constants::DEFAULT_CONTRAST_THRESHOLD;

/// Outcome of scoring one foreground/background color pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastScore {
    /// Absolute luminance difference, 0-255.
    pub value: f64,
    pub is_error: bool,
}

/// Classifies the luminance contrast between two mean colors.
///
/// The model is the absolute Rec.601 luma difference on a 0-255 scale,
/// not the WCAG contrast ratio. It is a known approximation kept for its
/// simplicity; the threshold is the tunable part.
pub struct ContrastEvaluator {
    threshold: f64,
}

impl ContrastEvaluator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn evaluate(&self, foreground: &Color, background: &Color) -> ContrastScore {
        let value = (luminance(foreground) - luminance(background)).abs();
        ContrastScore {
            value,
            is_error: value < self.threshold,
        }
    }
}

impl Default for ContrastEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRAST_THRESHOLD)
    }
}

/// Rec.601 perceptual luminance of a mean color, 0-255.
pub fn luminance(color: &Color) -> f64 {
    0.299 * color.r + 0.587 * color.g + 0.114 * color.b
}
