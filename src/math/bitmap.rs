// Copyright 2026 @TwoCookingMice

/// 8-bit RGB framebuffer, row-major. The renderer writes quantized pixels
/// into it; an external image writer owns encoding and file output.
#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0u8; 3 * width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the first channel of pixel (`x`, `y`) in the raw buffer.
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        3 * (self.width * y + x)
    }

    pub fn write_pixel(&mut self, index: usize, rgb: [u8; 3]) {
        self.data[index] = rgb[0];
        self.data[index + 1] = rgb[1];
        self.data[index + 2] = rgb[2];
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let index = self.pixel_index(x, y);
        [self.data[index], self.data[index + 1], self.data[index + 2]]
    }

    pub fn raw(&self) -> &[u8] {
        &self.data
    }
}

/* Test for Bitmap */
#[cfg(test)]
mod tests {
    use super::Bitmap;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(8, 4);
        assert_eq!(bitmap.width(), 8);
        assert_eq!(bitmap.height(), 4);
        assert_eq!(bitmap.raw().len(), 8 * 4 * 3);

        let index = bitmap.pixel_index(5, 2);
        bitmap.write_pixel(index, [255, 128, 7]);
        assert_eq!(bitmap.pixel(5, 2), [255, 128, 7]);
        assert_eq!(bitmap.pixel(4, 2), [0, 0, 0]);
    }
}
