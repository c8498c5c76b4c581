//! Owning 2D color buffer with bounds-checked pixel access.
//!
//! The pixel buffer is the rasterizer's only side-effect surface. Writes
//! outside the buffer are silently dropped; rasterization near the edges
//! never wraps to the next row.

use image::{Rgba, RgbaImage};

use crate::colors::{Color, ColorFormat};

/// Number of cells in a `width` x `height` grid, computed in `usize`.
pub(crate) fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// A grid of packed 32-bit pixels, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    format: ColorFormat,
}

impl PixelBuffer {
    /// Creates a black buffer in the default ARGB8888 format.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_format(width, height, ColorFormat::default())
    }

    pub fn with_format(width: u32, height: u32, format: ColorFormat) -> Self {
        Self {
            pixels: vec![Color::BLACK.pack(format); buffer_len(width, height)],
            width,
            height,
            format,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// The packed pixels, row by row.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.pack(self.format));
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Writes a pixel, returning whether it landed inside the buffer.
    ///
    /// Out-of-range coordinates are a no-op.
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = color.pack(self.format);
                true
            }
            None => false,
        }
    }

    /// Get the packed value at (x, y), or None if out of bounds.
    #[inline]
    pub fn read_packed(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.read_packed(x, y)
            .map(|packed| Color::unpack(packed, self.format))
    }

    /// Counts the pixels whose packed value equals `color` packed.
    pub fn count_pixels(&self, color: Color) -> usize {
        let packed = color.pack(self.format);
        self.pixels.iter().filter(|&&p| p == packed).count()
    }

    /// Copies an already decoded image into a new buffer.
    pub fn from_rgba_image(image: &RgbaImage, format: ColorFormat) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|&Rgba([r, g, b, _])| Color::from_rgb8(r, g, b).pack(format))
            .collect();
        Self {
            pixels,
            width,
            height,
            format,
        }
    }

    /// Converts the buffer into an opaque RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::unpack(self.pixels[y as usize * self.width as usize + x as usize], self.format);
            let to_u8 = |v: f32| (v * 255.0).round() as u8;
            Rgba([to_u8(c.r), to_u8(c.g), to_u8(c.b), 0xFF])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn buffer_len_does_not_wrap_in_u32() {
        assert_eq!(buffer_len(65_536, 65_536), 1usize << 32);
        assert_eq!(buffer_len(u32::MAX, 2), 2 * u32::MAX as usize);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert!(!buffer.write_pixel(-1, 0, Color::WHITE));
        assert!(!buffer.write_pixel(4, 0, Color::WHITE));
        assert!(!buffer.write_pixel(0, 3, Color::WHITE));
        assert_eq!(buffer.count_pixels(Color::BLACK), 12);
    }

    #[test]
    fn writes_do_not_wrap_rows() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.write_pixel(4, 1, Color::WHITE);
        assert_eq!(buffer.get_pixel(0, 2), Some(Color::BLACK));
    }

    #[test]
    fn write_then_read() {
        let mut buffer = PixelBuffer::with_format(4, 3, ColorFormat::Rgba8888);
        assert!(buffer.write_pixel(3, 2, Color::RED));
        assert_eq!(buffer.get_pixel(3, 2), Some(Color::RED));
        assert_eq!(buffer.read_packed(3, 2), Some(0xFF0000FF));
        assert_eq!(buffer.get_pixel(3, 3), None);
    }

    #[test]
    fn image_conversion_keeps_pixels() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.clear(Color::BLUE);
        buffer.write_pixel(1, 0, Color::GREEN);

        let image = buffer.to_rgba_image();
        assert_eq!(image.get_pixel(1, 0), &Rgba([0, 255, 0, 255]));

        let back = PixelBuffer::from_rgba_image(&image, ColorFormat::Argb8888);
        assert_eq!(back, buffer);
    }
}
