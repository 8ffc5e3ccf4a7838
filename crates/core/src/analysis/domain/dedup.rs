use std::collections::HashSet;

use crate::shared::text_box::TextBox;

/// Session-lifetime gate that admits each recognized string and each
/// exact bounding box at most once.
///
/// The two keys are checked in order, and a text rejection does not
/// record the box: identical strings score once regardless of where
/// they reappear, while a recurring caption slot scores once per
/// distinct box even when its wording changes. This keeps static
/// captions in long videos from flooding the error count.
pub struct DeduplicationTracker {
    seen_texts: HashSet<String>,
    seen_boxes: Vec<TextBox>,
}

impl DeduplicationTracker {
    pub fn new() -> Self {
        Self {
            seen_texts: HashSet::new(),
            seen_boxes: Vec::new(),
        }
    }

    /// Returns `true` when the candidate should be scored.
    pub fn admit(&mut self, text: &str, region: &TextBox) -> bool {
        if self.seen_texts.contains(text) {
            return false;
        }
        self.seen_texts.insert(text.to_string());

        if self.seen_boxes.contains(region) {
            return false;
        }
        self.seen_boxes.push(region.clone());
        true
    }
}

impl Default for DeduplicationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_box(x: i32, y: i32) -> TextBox {
        TextBox::new(x, y, 50, 20)
    }

    #[test]
    fn test_first_candidate_admitted() {
        let mut tracker = DeduplicationTracker::new();
        assert!(tracker.admit("SALE", &text_box(10, 10)));
    }

    #[test]
    fn test_repeated_pair_admitted_once() {
        let mut tracker = DeduplicationTracker::new();
        assert!(tracker.admit("SALE", &text_box(10, 10)));
        assert!(!tracker.admit("SALE", &text_box(10, 10)));
        assert!(!tracker.admit("SALE", &text_box(10, 10)));
    }

    #[test]
    fn test_same_text_different_box_rejected() {
        // First occurrence wins video-wide for a given string.
        let mut tracker = DeduplicationTracker::new();
        assert!(tracker.admit("SALE", &text_box(10, 10)));
        assert!(!tracker.admit("SALE", &text_box(200, 10)));
    }

    #[test]
    fn test_same_box_different_text_rejected() {
        // A caption slot scores once even when its wording changes.
        let mut tracker = DeduplicationTracker::new();
        assert!(tracker.admit("first line", &text_box(10, 10)));
        assert!(!tracker.admit("second line", &text_box(10, 10)));
    }

    #[test]
    fn test_text_rejection_does_not_record_box() {
        let mut tracker = DeduplicationTracker::new();
        assert!(tracker.admit("SALE", &text_box(10, 10)));
        // Rejected on text; its box at (200, 10) must stay unrecorded...
        assert!(!tracker.admit("SALE", &text_box(200, 10)));
        // ...so a new text at that box is still admitted.
        assert!(tracker.admit("NEW", &text_box(200, 10)));
    }

    #[test]
    fn test_distinct_candidates_all_admitted() {
        let mut tracker = DeduplicationTracker::new();
        assert!(tracker.admit("a", &text_box(0, 0)));
        assert!(tracker.admit("b", &text_box(0, 30)));
        assert!(tracker.admit("c", &text_box(0, 60)));
    }

    #[test]
    fn test_admission_count_is_order_independent() {
        let candidates = [
            ("SALE", text_box(10, 10)),
            ("NEW", text_box(10, 40)),
            ("SALE", text_box(10, 10)),
            ("NEW", text_box(200, 40)),
        ];

        let count_in_order = |order: &[usize]| {
            let mut tracker = DeduplicationTracker::new();
            order
                .iter()
                .filter(|&&i| tracker.admit(candidates[i].0, &candidates[i].1))
                .count()
        };

        assert_eq!(count_in_order(&[0, 1, 2, 3]), count_in_order(&[3, 2, 1, 0]));
    }
}
