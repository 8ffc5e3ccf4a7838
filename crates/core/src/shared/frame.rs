use ndarray::ArrayView3;

/// A single decoded frame: contiguous RGB bytes in row-major order.
///
/// Channel order is fixed as R, G, B throughout the crate. The luminance
/// model weighs channels individually, so readers must deliver exactly
/// this layout; conversion happens at I/O boundaries only.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of this frame in decode order, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// View as a `(height, width, channels)` array for region slicing.
    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        let shape = (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        );
        ArrayView3::from_shape(shape, &self.data).expect("Frame data length must match dimensions")
    }

    /// Returns an aspect-preserving copy scaled to `target_width`.
    ///
    /// Used to bound detection and color-sampling cost on large sources.
    /// A target at or above the current width returns a plain clone, so
    /// small frames are never upscaled.
    pub fn scaled_to_width(&self, target_width: u32) -> Frame {
        if target_width == 0 || target_width >= self.width {
            return self.clone();
        }
        let target_height =
            ((self.height as u64 * target_width as u64) / self.width as u64).max(1) as u32;

        let img = image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .expect("Frame data length must match dimensions");
        let scaled = image::imageops::resize(
            &img,
            target_width,
            target_height,
            image::imageops::FilterType::Triangle,
        );
        Frame::new(
            scaled.into_raw(),
            target_width,
            target_height,
            3,
            self.index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(w: u32, h: u32, rgb: [u8; 3]) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for _ in 0..(w * h) {
            data.extend_from_slice(&rgb);
        }
        Frame::new(data, w, h, 3, 0)
    }

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3, 7);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.index(), 7);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2, 3, 0);
    }

    #[test]
    fn test_as_ndarray_shape_and_pixel_access() {
        // 2x2 RGB with pixel (row=1, col=0) set to pure red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let frame = Frame::new(data, 2, 2, 3, 0);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 2, 3]);
        assert_eq!(arr[[1, 0, 0]], 255); // R
        assert_eq!(arr[[1, 0, 1]], 0); // G
        assert_eq!(arr[[1, 0, 2]], 0); // B
    }

    #[test]
    fn test_scaled_to_width_preserves_aspect() {
        let frame = solid_frame(100, 50, [10, 20, 30]);
        let scaled = frame.scaled_to_width(40);
        assert_eq!(scaled.width(), 40);
        assert_eq!(scaled.height(), 20);
        assert_eq!(scaled.channels(), 3);
    }

    #[test]
    fn test_scaled_to_width_keeps_solid_color() {
        let frame = solid_frame(80, 40, [200, 100, 50]);
        let scaled = frame.scaled_to_width(20);
        assert_eq!(&scaled.data()[..3], &[200, 100, 50]);
    }

    #[test]
    fn test_scaled_to_width_never_upscales() {
        let frame = solid_frame(30, 30, [1, 2, 3]);
        let scaled = frame.scaled_to_width(100);
        assert_eq!(scaled.width(), 30);
        assert_eq!(scaled.height(), 30);
    }

    #[test]
    fn test_scaled_to_width_keeps_index() {
        let frame = Frame::new(vec![0u8; 100 * 50 * 3], 100, 50, 3, 42);
        assert_eq!(frame.scaled_to_width(40).index(), 42);
    }
}
