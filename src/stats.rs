//! Rendering statistics.
//!
//! The renderer does no logging; instead every call to
//! [`Engine::render`](crate::engine::Engine::render) returns a
//! [`RenderStats`] telling where each submitted triangle went.

use std::fmt::{self, Display, Formatter};
use std::ops::AddAssign;
use std::time::Duration;

/// Counters collected while rendering one or more frames.
///
/// Every submitted triangle ends up in exactly one of `culled`,
/// `clipped`, `degenerate` or `rasterized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of frames rendered.
    pub frames: usize,
    /// Scene objects visited.
    pub objects: usize,
    /// Triangles handed to the pipeline.
    pub triangles: usize,
    /// Triangles dropped by backface culling.
    pub culled: usize,
    /// Triangles rejected by the near/far test.
    pub clipped: usize,
    /// Zero-area triangles skipped by the fill.
    pub degenerate: usize,
    /// Triangles that reached the pixel buffer.
    pub rasterized: usize,
    /// Pixel writes that landed inside the buffer, overdraw included.
    pub pixels: usize,
}

impl RenderStats {
    /// Creates a new zeroed `RenderStats`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles that did not make it to the pixel buffer.
    pub fn rejected(&self) -> usize {
        self.culled + self.clipped + self.degenerate
    }
}

impl Display for RenderStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(8);
        writeln!(f, " frames     {:>w$}", self.frames)?;
        writeln!(f, " time       {:>w$}", format!("{:.2?}", self.time))?;
        writeln!(f, " objects    {:>w$}", self.objects)?;
        writeln!(f, " triangles  {:>w$}", self.triangles)?;
        writeln!(f, "   culled   {:>w$}", self.culled)?;
        writeln!(f, "   clipped  {:>w$}", self.clipped)?;
        writeln!(f, "   degen    {:>w$}", self.degenerate)?;
        writeln!(f, "   drawn    {:>w$}", self.rasterized)?;
        writeln!(f, " pixels     {:>w$}", self.pixels)
    }
}

impl AddAssign for RenderStats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.frames += other.frames;
        self.objects += other.objects;
        self.triangles += other.triangles;
        self.culled += other.culled;
        self.clipped += other.clipped;
        self.degenerate += other.degenerate;
        self.rasterized += other.rasterized;
        self.pixels += other.pixels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assign_accumulates() {
        let frame = RenderStats {
            frames: 1,
            triangles: 12,
            culled: 6,
            rasterized: 6,
            pixels: 100,
            ..RenderStats::new()
        };
        let mut total = RenderStats::new();
        total += frame;
        total += frame;
        assert_eq!(total.frames, 2);
        assert_eq!(total.triangles, 24);
        assert_eq!(total.rejected(), 12);
        assert_eq!(total.pixels, 200);
    }

    #[test]
    fn display_lists_counters() {
        let stats = RenderStats {
            triangles: 3,
            clipped: 1,
            ..RenderStats::new()
        };
        let s = stats.to_string();
        assert!(s.contains("triangles"));
        assert!(s.lines().any(|l| l.contains("clipped") && l.trim_end().ends_with('1')));
    }
}
