//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer handles:
//! - Bounding box computation
//! - Inside/outside testing
//! - Barycentric coordinate calculation
//!
//! The shader handles:
//! - Attribute interpolation (colors, UVs)
//! - Texture sampling
//! - Final color computation

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// The rasterizer calls `shade()` for each pixel inside the triangle,
/// providing the barycentric coordinates for attribute interpolation.
///
/// # Barycentric Coordinates
///
/// The `lambda` parameter contains three weights [λ₀, λ₁, λ₂] that:
/// - Sum to 1.0 for any point inside the triangle
/// - Represent the "influence" of each vertex on the current pixel
/// - Can be used to interpolate any per-vertex attribute:
///   `attr_at_pixel = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`
///
/// Interpolation is linear in screen space, not perspective-correct.
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> Color;
}

/// Flat shader - returns a constant color for all pixels.
pub struct FlatShader {
    color: Color,
}

impl FlatShader {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> Color {
        self.color
    }
}

/// Gouraud shader - interpolates vertex colors using barycentric coordinates.
pub struct GouraudShader {
    colors: [Color; 3],
}

impl GouraudShader {
    pub fn new(colors: [Color; 3]) -> Self {
        Self { colors }
    }
}

impl PixelShader for GouraudShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Color {
        Color::blend3(&self.colors, lambda).clamp()
    }
}

/// Texture shader - interpolated vertex color modulated by a texel.
///
/// UVs are interpolated with the same weights as the colors, clamped to
/// `[0, 1]` and looked up with nearest-neighbor sampling.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uvs: [Vec2; 3],
    colors: [Color; 3],
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: &'a Texture, uvs: [Vec2; 3], colors: [Color; 3]) -> Self {
        Self {
            texture,
            uvs,
            colors,
        }
    }

    #[inline]
    fn interpolate_uv(&self, lambda: [f32; 3]) -> Vec2 {
        self.uvs[0] * lambda[0] + self.uvs[1] * lambda[1] + self.uvs[2] * lambda[2]
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Color {
        let texel = self.texture.sample_nearest(self.interpolate_uv(lambda));
        Color::blend3(&self.colors, lambda).modulate(texel).clamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::checkerboard;
    use approx::assert_relative_eq;

    #[test]
    fn gouraud_blends_by_weight() {
        let shader = GouraudShader::new([Color::RED, Color::GREEN, Color::BLUE]);
        let c = shader.shade([0.5, 0.25, 0.25]);
        assert_relative_eq!(c.r, 0.5);
        assert_relative_eq!(c.g, 0.25);
        assert_relative_eq!(c.b, 0.25);
    }

    #[test]
    fn texture_modulates_interpolated_color() {
        let texture = checkerboard(2, 2, Color::WHITE, Color::gray(0.5));
        let uvs = [Vec2::new(0.1, 0.1), Vec2::new(0.9, 0.1), Vec2::new(0.1, 0.9)];
        let shader = TextureShader::new(&texture, uvs, [Color::RED; 3]);

        assert_eq!(shader.shade([1.0, 0.0, 0.0]), Color::RED);
        let c = shader.shade([0.0, 1.0, 0.0]);
        assert_relative_eq!(c.r, 128.0 / 255.0);
        assert_relative_eq!(c.g, 0.0);
    }
}
