//! Textures for texture mapping.
//!
//! A texture is simply a [`PixelBuffer`] holding already decoded texels;
//! decoding image files is left to the caller (see
//! [`PixelBuffer::from_rgba_image`]).

use crate::colors::{Color, ColorFormat};
use crate::math::vec2::Vec2;
use crate::render::PixelBuffer;

/// Textures share the pixel buffer contract: width, height and `get_pixel`.
pub type Texture = PixelBuffer;

impl PixelBuffer {
    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// # UV Coordinate Convention
    /// - UVs are clamped to `[0, 1]` (no wrapping)
    /// - `(0, 0)` is the top-left texel, `(1, 1)` the bottom-right one
    /// - The texel index is `floor(uv * dimension)`, clamped to `dimension - 1`
    #[inline]
    pub fn sample_nearest(&self, uv: Vec2) -> Color {
        let uv = uv.saturate();
        let x = ((uv.x * self.width() as f32).floor() as u32).min(self.width().saturating_sub(1));
        let y = ((uv.y * self.height() as f32).floor() as u32).min(self.height().saturating_sub(1));
        self.get_pixel(x as i32, y as i32).unwrap_or(Color::BLACK)
    }
}

/// Builds a `size x size` checkerboard with `cells` squares per side.
pub fn checkerboard(size: u32, cells: u32, a: Color, b: Color) -> Texture {
    let mut texture = PixelBuffer::with_format(size, size, ColorFormat::default());
    let cell = (size / cells.max(1)).max(1);
    for y in 0..size {
        for x in 0..size {
            let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            texture.write_pixel(x as i32, y as i32, color);
        }
    }
    texture
}
