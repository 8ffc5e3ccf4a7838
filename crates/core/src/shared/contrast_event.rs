use crate::shared::text_box::TextBox;

/// Diagnostic record for one detected contrast error.
///
/// `frame_index` is the 1-based cumulative raw-frame count at which the
/// region was scored (for images it is always 1). These events are a
/// side channel; the session contract is the final count alone.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastEvent {
    pub frame_index: usize,
    pub text: String,
    pub region: TextBox,
    /// Absolute luminance difference on the 0-255 scale.
    pub contrast: f64,
}
