//! Bounding-box triangle fill with barycentric inside tests.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's bounding box and clamp it to the buffer
//! 2. For each pixel center in the box, compute barycentric weights
//! 3. A pixel is inside when all three weights lie in `[0, 1]`
//!
//! # Barycentric Coordinates
//!
//! Each weight is the doubled signed area of the sub-triangle formed by the
//! pixel and the edge opposite a vertex, divided by the doubled signed area
//! of the whole triangle (taken with vertex 0 as the apex):
//!
//! ```text
//! area = (v1 - v0) x (v2 - v0)
//! λ0   = (v2 - v1) x (p - v1) / area
//! λ1   = (v0 - v2) x (p - v2) / area
//! λ2   = (v1 - v0) x (p - v0) / area
//! ```
//!
//! Dividing by the signed area makes the test independent of winding.
//! Edges are inclusive: pixels exactly on a shared edge are drawn by both
//! triangles.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::shader::PixelShader;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::PixelBuffer;

/// Doubled signed area of triangle (a, b, c), i.e. `(b - a) x (c - a)`.
#[inline]
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Barycentric weights of `p` relative to triangle `v`.
///
/// Returns `None` for degenerate (zero-area) triangles.
#[inline]
pub fn barycentric(p: Vec2, v: [Vec2; 3]) -> Option<[f32; 3]> {
    let area = signed_area(v[0], v[1], v[2]);
    if area.abs() < f32::EPSILON {
        return None;
    }
    Some(weights(p, v, 1.0 / area))
}

#[inline]
fn weights(p: Vec2, v: [Vec2; 3], inv_area: f32) -> [f32; 3] {
    [
        signed_area(v[1], v[2], p) * inv_area,
        signed_area(v[2], v[0], p) * inv_area,
        signed_area(v[0], v[1], p) * inv_area,
    ]
}

#[inline]
fn is_inside(lambda: [f32; 3]) -> bool {
    lambda.iter().all(|l| (0.0..=1.0).contains(l))
}

/// Triangle filler iterating over the bounding box.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    /// Fills the triangle with colors from `shader`.
    ///
    /// Returns the number of pixels written, or `None` if the triangle is
    /// degenerate and was skipped.
    pub fn fill<S: PixelShader>(
        &self,
        points: &[Vec3; 3],
        buffer: &mut PixelBuffer,
        shader: &S,
    ) -> Option<usize> {
        let v = points.map(|p| Vec2::new(p.x, p.y));

        let area = signed_area(v[0], v[1], v[2]);
        if area.abs() < f32::EPSILON {
            return None;
        }
        let inv_area = 1.0 / area;

        // Bounding box, clamped to the buffer
        let min_x = (v[0].x.min(v[1].x).min(v[2].x).floor() as i32).max(0);
        let max_x = (v[0].x.max(v[1].x).max(v[2].x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v[0].y.min(v[1].y).min(v[2].y).floor() as i32).max(0);
        let max_y = (v[0].y.max(v[1].y).max(v[2].y).ceil() as i32).min(buffer.height() as i32 - 1);

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at pixel center
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let lambda = weights(p, v, inv_area);
                if is_inside(lambda) && buffer.write_pixel(x, y, shader.shade(lambda)) {
                    written += 1;
                }
            }
        }
        Some(written)
    }
}
