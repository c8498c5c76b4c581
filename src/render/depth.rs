//! Standalone depth buffer.
//!
//! Stores one depth value per pixel with "smaller is closer" semantics.
//! The software rasterizer draws in painter's order and does not consult
//! this buffer; it is provided for callers that want their own z-testing.

use super::pixel_buffer::buffer_len;

/// Per-pixel depth values, cleared to positive infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depths: vec![f32::INFINITY; buffer_len(width, height)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.depths.fill(f32::INFINITY);
    }

    /// Depth stored at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depths[idx])
    }

    /// Stores `depth` if it is closer than the current value.
    ///
    /// Returns whether the test passed. Out-of-bounds coordinates fail.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, depth: f32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth < self.depths[idx] => {
                self.depths[idx] = depth;
                true
            }
            _ => false,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}
