use crate::color::Rgb;

/// Decoded image: tightly packed 8-bit RGB, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    pub const CHANNELS: usize = 3;

    pub fn new(buffer: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(buffer.len(), width as usize * height as usize * Self::CHANNELS);
        Self {
            buffer,
            width,
            height,
        }
    }

    /// Pixel at (x, y), or `None` outside the image.
    #[inline(always)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        let offset = (y * self.width as usize + x) * Self::CHANNELS;
        Some(Rgb::new(
            self.buffer[offset],
            self.buffer[offset + 1],
            self.buffer[offset + 2],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_are_row_major() {
        let image = ImageData::new((0..18).collect(), 3, 2);
        assert_eq!(image.pixel(0, 0), Some(Rgb::new(0, 1, 2)));
        assert_eq!(image.pixel(2, 0), Some(Rgb::new(6, 7, 8)));
        assert_eq!(image.pixel(1, 1), Some(Rgb::new(12, 13, 14)));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }
}
