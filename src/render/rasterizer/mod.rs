//! Triangle rasterization.
//!
//! A [`ScreenTriangle`] carries screen-space points, lit per-vertex colors and
//! the material it is drawn with. [`draw_triangle`] picks the fill or line
//! strategy from the material's shading mode:
//!
//! | Mode                                | Strategy                                 |
//! |-------------------------------------|------------------------------------------|
//! | `Wireframe`                         | three lines in the first vertex's color   |
//! | `WireframeVertexColorInterpolation` | three lines blending their end colors     |
//! | `Flat`                              | fill with the first vertex's color        |
//! | `FaceVertexColorInterpolation`      | fill blending vertex colors               |
//! | `Gouraud`, `Material`               | fill blending lit vertex colors           |
//! | `Textured`                          | blended colors times nearest texel        |
//!
//! No depth test is done: later triangles overwrite earlier ones.

mod edgefunction;
mod shader;

pub use edgefunction::{barycentric, signed_area, EdgeFunctionRasterizer};
pub use shader::{FlatShader, GouraudShader, PixelShader, TextureShader};

use super::line::draw_line;
use super::PixelBuffer;
use crate::colors::Color;
use crate::error::MaterialError;
use crate::material::{MaterialRef, ShadingMode};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Debug)]
pub struct ScreenTriangle {
    /// Pixel coordinates in x and y, normalized device depth in z.
    pub points: [Vec3; 3],
    /// Per-vertex colors after lighting.
    pub colors: [Color; 3],
    pub material: MaterialRef,
}

impl ScreenTriangle {
    /// A triangle with all vertex colors black.
    pub fn new(points: [Vec3; 3], material: MaterialRef) -> Self {
        Self {
            points,
            colors: [Color::BLACK; 3],
            material,
        }
    }

    pub fn with_colors(mut self, colors: [Color; 3]) -> Self {
        self.colors = colors;
        self
    }

    fn pixel(&self, index: usize) -> Vec2 {
        let p = self.points[index];
        Vec2::new(p.x, p.y)
    }
}

/// What happened to a triangle handed to [`draw_triangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// The triangle was drawn, writing this many pixels.
    Drawn(usize),
    /// Zero-area triangle skipped by a filling mode.
    Degenerate,
}

/// Draws `triangle` into `buffer` according to its material's shading mode.
///
/// Fails only when a textured material lacks its texture or coordinates.
pub fn draw_triangle(
    triangle: &ScreenTriangle,
    buffer: &mut PixelBuffer,
) -> Result<Coverage, MaterialError> {
    let rasterizer = EdgeFunctionRasterizer::new();
    let material = &triangle.material;
    let colors = triangle.colors;

    let filled = match material.shading {
        ShadingMode::Wireframe => {
            return Ok(Coverage::Drawn(draw_wireframe(triangle, buffer, [colors[0]; 3])));
        }
        ShadingMode::WireframeVertexColorInterpolation => {
            return Ok(Coverage::Drawn(draw_wireframe(triangle, buffer, colors)));
        }
        ShadingMode::Flat => {
            rasterizer.fill(&triangle.points, buffer, &FlatShader::new(colors[0]))
        }
        ShadingMode::FaceVertexColorInterpolation | ShadingMode::Gouraud | ShadingMode::Material => {
            rasterizer.fill(&triangle.points, buffer, &GouraudShader::new(colors))
        }
        ShadingMode::Textured => {
            let texture = material
                .texture
                .as_deref()
                .ok_or(MaterialError::MissingTexture)?;
            let uvs = material
                .texture_coords
                .ok_or(MaterialError::MissingTextureCoords)?;
            rasterizer.fill(&triangle.points, buffer, &TextureShader::new(texture, uvs, colors))
        }
    };

    Ok(filled.map_or(Coverage::Degenerate, Coverage::Drawn))
}

/// Draws the three edges v0-v1, v1-v2, v2-v0, each blending from its start
/// vertex color to its end vertex color.
fn draw_wireframe(triangle: &ScreenTriangle, buffer: &mut PixelBuffer, colors: [Color; 3]) -> usize {
    (0..3)
        .map(|i| {
            let j = (i + 1) % 3;
            draw_line(buffer, triangle.pixel(i), triangle.pixel(j), colors[i], colors[j])
        })
        .sum()
}
