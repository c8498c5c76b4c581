//! Drawing surfaces, per-vertex lighting and rasterization.

mod depth;
mod lighting;
mod line;
mod pixel_buffer;
pub mod rasterizer;

pub use depth::DepthBuffer;
pub use lighting::{compute_lighting, compute_shading};
pub use line::draw_line;
pub use pixel_buffer::PixelBuffer;
pub use rasterizer::{barycentric, draw_triangle, Coverage, ScreenTriangle};
