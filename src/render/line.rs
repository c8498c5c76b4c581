//! Line drawing for wireframe shading.

use super::PixelBuffer;
use crate::colors::Color;
use crate::math::vec2::Vec2;

/// Clips segment `p0 -> p1` to the rectangle `[0, max.x] x [0, max.y]`.
///
/// Liang-Barsky: returns the parameter range `(t0, t1)` of the visible part,
/// or `None` when the segment misses the rectangle. Works in `f64` so that
/// far off-screen endpoints still clip to the right pixels.
fn clip_segment(p0: Vec2, p1: Vec2, max: Vec2) -> Option<(f64, f64)> {
    let (x0, y0) = (p0.x as f64, p0.y as f64);
    let (dx, dy) = (p1.x as f64 - x0, p1.y as f64 - y0);

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, x0),
        (dx, max.x as f64 - x0),
        (-dy, y0),
        (dy, max.y as f64 - y0),
    ] {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    Some((t0, t1))
}

/// Draws a line from `p0` to `p1` (pixel coordinates) using Bresenham's
/// algorithm.
///
/// The segment is first clipped to the buffer, then walked in integer steps:
/// an error term tracks the distance between the ideal line and the current
/// pixel, and for each step along the major axis it decides whether to also
/// step along the minor axis.
///
/// The color of each pixel is `start` blended toward `end` by its Euclidean
/// distance along the unclipped line. Passing the same color twice draws a
/// uniform line. Both endpoints are drawn when on screen.
///
/// Returns the number of pixels that landed inside the buffer.
pub fn draw_line(buffer: &mut PixelBuffer, p0: Vec2, p1: Vec2, start: Color, end: Color) -> usize {
    if !(p0.x.is_finite() && p0.y.is_finite() && p1.x.is_finite() && p1.y.is_finite()) {
        return 0;
    }
    let bounds = Vec2::new(buffer.width() as f32, buffer.height() as f32);
    let Some((t0, t1)) = clip_segment(p0, p1, bounds) else {
        return 0;
    };

    let at = |t: f64| {
        let x = p0.x as f64 + (p1.x as f64 - p0.x as f64) * t;
        let y = p0.y as f64 + (p1.y as f64 - p0.y as f64) * t;
        (
            x.clamp(0.0, bounds.x as f64) as i32,
            y.clamp(0.0, bounds.y as f64) as i32,
        )
    };
    let (x0, y0) = at(t0);
    let (x1, y1) = at(t1);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    let origin = Vec2::new(x0 as f32, y0 as f32);
    let length = origin.distance(Vec2::new(x1 as f32, y1 as f32));
    let (t0, t1) = (t0 as f32, t1 as f32);

    let x_step = if x0 < x1 { 1 } else { -1 };
    let y_step = if y0 < y1 { 1 } else { -1 };

    // Positive error favors x movement, negative favors y
    let mut err = dx - dy;
    let mut x = x0;
    let mut y = y0;
    let mut written = 0;

    loop {
        let color = if length > 0.0 {
            let along = origin.distance(Vec2::new(x as f32, y as f32)) / length;
            start.lerp(end, t0 + (t1 - t0) * along)
        } else {
            start.lerp(end, t0)
        };
        if buffer.write_pixel(x, y, color) {
            written += 1;
        }

        if x == x1 && y == y1 {
            break;
        }

        // Both conditions may hold, giving a diagonal step
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_step;
        }
        if e2 < dx {
            err += dx;
            y += y_step;
        }
    }
    written
}
