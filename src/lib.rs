//! A CPU software rasterizer.
//!
//! Scenes of triangles are transformed through a camera's viewing pipeline,
//! lit per vertex and filled into an in-memory [`PixelBuffer`] with one of
//! seven shading modes. No GPU, window or file format is involved; convert
//! the result with [`PixelBuffer::to_rgba_image`] to save or display it.
//!
//! # Quick Start
//!
//! ```ignore
//! use softlit::prelude::*;
//!
//! let material = Material::solid(ShadingMode::Gouraud, Color::RED).into_ref();
//! let mut scene = Scene::new(Color::BLACK)
//!     .with_lighting(Lighting::Enabled(vec![Light::ambient(Color::gray(0.2))]));
//! scene.add_object(SceneObject::new(mesh::cube(&material)));
//!
//! let camera = Camera::looking_at(Vec3::new(3.0, 3.0, 6.0), Vec3::ZERO, (320, 240));
//! let mut target = PixelBuffer::new(320, 240);
//! let stats = Engine::default().render(&scene, &camera, &mut target)?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod engine;
pub mod error;
pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod ray;
pub mod render;
pub mod scene;
pub mod stats;
pub mod texture;
pub mod transform;
pub mod triangle;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use colors::{Color, ColorFormat};
pub use engine::{Engine, RenderOptions};
pub use error::{MaterialError, RenderError, Result};
pub use light::{Light, LightKind, Lighting};
pub use material::{Material, MaterialRef, ShadingMode};
pub use projection::Projection;
pub use render::{DepthBuffer, PixelBuffer};
pub use scene::{Scene, SceneObject};
pub use stats::RenderStats;
pub use texture::Texture;
pub use transform::Transform;
pub use triangle::Triangle;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softlit::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::light::{Light, LightKind, Lighting};
    pub use crate::material::{Material, MaterialRef, ShadingMode};
    pub use crate::mesh;
    pub use crate::scene::{Scene, SceneObject};
    pub use crate::transform::Transform;
    pub use crate::triangle::Triangle;

    // Camera
    pub use crate::camera::Camera;
    pub use crate::projection::Projection;

    // Engine
    pub use crate::engine::{Engine, RenderOptions};
    pub use crate::error::RenderError;
    pub use crate::stats::RenderStats;

    // Rendering
    pub use crate::colors::Color;
    pub use crate::render::PixelBuffer;
    pub use crate::texture::Texture;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}
