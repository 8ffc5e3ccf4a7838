/// Axis-aligned bounding box of a recognized text region, in pixel
/// coordinates of the frame it was detected on (origin top-left).
///
/// Derives `Eq`/`Hash` so the deduplication gate can do exact membership
/// checks on previously scored boxes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TextBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Only boxes with positive width and height are eligible for scoring.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One text detection: where it is, what was read, and how sure the
/// localizer is. Produced per detect call and not retained afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCandidate {
    pub region: TextBox,
    pub text: String,
    /// Localizer confidence in `[0, 1]`.
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case::positive(10, 10, 50, 20, true)]
    #[case::zero_width(10, 10, 0, 20, false)]
    #[case::zero_height(10, 10, 50, 0, false)]
    #[case::both_zero(0, 0, 0, 0, false)]
    #[case::negative_width(5, 5, -3, 10, false)]
    fn test_has_area(
        #[case] x: i32,
        #[case] y: i32,
        #[case] w: i32,
        #[case] h: i32,
        #[case] expected: bool,
    ) {
        assert_eq!(TextBox::new(x, y, w, h).has_area(), expected);
    }

    #[test]
    fn test_equality_is_exact_tuple_match() {
        let a = TextBox::new(10, 10, 50, 20);
        let b = TextBox::new(10, 10, 50, 20);
        let c = TextBox::new(10, 11, 50, 20);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_usable_in_hash_set() {
        let mut seen = HashSet::new();
        assert!(seen.insert(TextBox::new(0, 0, 10, 10)));
        assert!(!seen.insert(TextBox::new(0, 0, 10, 10)));
    }
}
