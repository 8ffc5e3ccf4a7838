use crate::shared::frame::Frame;
use crate::shared::text_box::TextCandidate;

/// Domain interface for text localization and recognition.
///
/// The pipeline treats detection as an opaque, confidence-scored oracle:
/// one frame in, a finite candidate list out, in no guaranteed order.
/// Implementations may be stateful, hence `&mut self`.
pub trait TextLocalizer: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<TextCandidate>, Box<dyn std::error::Error>>;
}
