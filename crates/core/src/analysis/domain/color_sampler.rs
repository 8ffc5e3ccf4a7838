use ndarray::s;

use crate::shared::constants::DEFAULT_BACKGROUND_MARGIN;
use crate::shared::frame::Frame;
use crate::shared::text_box::TextBox;

/// Per-channel mean color of a pixel region, on the 0-255 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

/// Reduces the text rectangle and its surrounding background to
/// representative mean colors.
///
/// The background is the text box expanded by `margin` pixels per side
/// and clamped to the frame, so it always contains the text pixels plus
/// a ring of surroundings. A rectangle that collapses to zero area under
/// clamping yields black; degenerate input is a policy here, not a
/// failure.
pub struct RegionColorSampler {
    margin: i32,
}

impl RegionColorSampler {
    pub fn new(margin: i32) -> Self {
        Self { margin }
    }

    /// Mean color over the exact text rectangle.
    pub fn text_color(&self, frame: &Frame, region: &TextBox) -> Color {
        mean_color(
            frame,
            region.x,
            region.y,
            region.x + region.width,
            region.y + region.height,
        )
    }

    /// Mean color over the margin-expanded rectangle.
    pub fn background_color(&self, frame: &Frame, region: &TextBox) -> Color {
        mean_color(
            frame,
            region.x - self.margin,
            region.y - self.margin,
            region.x + region.width + self.margin,
            region.y + region.height + self.margin,
        )
    }
}

impl Default for RegionColorSampler {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND_MARGIN)
    }
}

/// Per-channel mean over `[x1, x2) x [y1, y2)`, clamped to the frame.
/// An empty rectangle after clamping yields black.
fn mean_color(frame: &Frame, x1: i32, y1: i32, x2: i32, y2: i32) -> Color {
    let w = frame.width() as i32;
    let h = frame.height() as i32;
    let x1 = x1.clamp(0, w) as usize;
    let y1 = y1.clamp(0, h) as usize;
    let x2 = x2.clamp(0, w) as usize;
    let y2 = y2.clamp(0, h) as usize;

    if x2 <= x1 || y2 <= y1 {
        return Color::BLACK;
    }

    let view = frame.as_ndarray();
    let region = view.slice(s![y1..y2, x1..x2, ..]);
    let pixels = ((x2 - x1) * (y2 - y1)) as f64;

    let mut sums = [0.0f64; 3];
    for ((_, _, channel), &value) in region.indexed_iter() {
        sums[channel] += value as f64;
    }

    Color {
        r: sums[0] / pixels,
        g: sums[1] / pixels,
        b: sums[2] / pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid_frame(w: u32, h: u32, rgb: [u8; 3]) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for _ in 0..(w * h) {
            data.extend_from_slice(&rgb);
        }
        Frame::new(data, w, h, 3, 0)
    }

    fn paint_rect(frame: &mut Vec<u8>, frame_w: u32, rect: &TextBox, rgb: [u8; 3]) {
        for row in rect.y..rect.y + rect.height {
            for col in rect.x..rect.x + rect.width {
                let offset = (row as usize * frame_w as usize + col as usize) * 3;
                frame[offset..offset + 3].copy_from_slice(&rgb);
            }
        }
    }

    fn frame_with_patch(
        w: u32,
        h: u32,
        background: [u8; 3],
        patch: &TextBox,
        patch_rgb: [u8; 3],
    ) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for _ in 0..(w * h) {
            data.extend_from_slice(&background);
        }
        paint_rect(&mut data, w, patch, patch_rgb);
        Frame::new(data, w, h, 3, 0)
    }

    #[test]
    fn test_text_color_on_uniform_patch() {
        let region = TextBox::new(10, 10, 20, 8);
        let frame = frame_with_patch(100, 50, [0, 0, 0], &region, [200, 150, 100]);
        let color = RegionColorSampler::default().text_color(&frame, &region);
        assert_relative_eq!(color.r, 200.0);
        assert_relative_eq!(color.g, 150.0);
        assert_relative_eq!(color.b, 100.0);
    }

    #[test]
    fn test_background_includes_text_and_ring() {
        // 10x10 patch at 200 inside a 100-valued frame, margin 5:
        // background region is 20x20 = 400 px, 100 of them at 200.
        let region = TextBox::new(40, 20, 10, 10);
        let frame = frame_with_patch(100, 60, [100, 100, 100], &region, [200, 200, 200]);
        let color = RegionColorSampler::new(5).background_color(&frame, &region);
        let expected = (100.0 * 200.0 + 300.0 * 100.0) / 400.0;
        assert_relative_eq!(color.r, expected);
        assert_relative_eq!(color.g, expected);
        assert_relative_eq!(color.b, expected);
    }

    #[test]
    fn test_background_clamped_at_frame_edge() {
        // Box flush with the top-left corner: the expansion is clipped,
        // leaving a 15x15 region for a 10x10 box with margin 5.
        let region = TextBox::new(0, 0, 10, 10);
        let frame = solid_frame(40, 40, [80, 90, 70]);
        let color = RegionColorSampler::new(5).background_color(&frame, &region);
        assert_relative_eq!(color.r, 80.0);
        assert_relative_eq!(color.g, 90.0);
        assert_relative_eq!(color.b, 70.0);
    }

    #[test]
    fn test_collapsed_region_yields_black() {
        // Box entirely outside the frame: clamping empties the rectangle.
        let region = TextBox::new(500, 500, 10, 10);
        let frame = solid_frame(40, 40, [255, 255, 255]);
        let sampler = RegionColorSampler::new(5);
        assert_eq!(sampler.background_color(&frame, &region), Color::BLACK);
        assert_eq!(sampler.text_color(&frame, &region), Color::BLACK);
    }

    #[test]
    fn test_text_rectangle_clipped_to_frame() {
        // Box hangs off the right edge; only the in-frame pixels count.
        let region = TextBox::new(35, 0, 10, 10);
        let frame = solid_frame(40, 40, [60, 60, 60]);
        let color = RegionColorSampler::default().text_color(&frame, &region);
        assert_relative_eq!(color.r, 60.0);
    }

    #[test]
    fn test_zero_margin_background_equals_text_region() {
        let region = TextBox::new(5, 5, 6, 6);
        let frame = frame_with_patch(30, 30, [10, 10, 10], &region, [250, 250, 250]);
        let sampler = RegionColorSampler::new(0);
        assert_eq!(
            sampler.background_color(&frame, &region),
            sampler.text_color(&frame, &region)
        );
    }
}
