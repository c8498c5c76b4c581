//! Core rendering engine.
//!
//! The [`Engine`] is the main entry point of the renderer. Each call to
//! [`Engine::render`] draws a whole [`Scene`] into a [`PixelBuffer`]:
//!
//! 1. Clear the target to the scene background
//! 2. For each object, build its world matrix once
//! 3. For each triangle: world transform, backface cull, view/project,
//!    light the vertices, rasterize
//!
//! Objects and triangles are drawn in order, later ones over earlier ones
//! (painter's algorithm without sorting). There is no depth test.

use std::time::Instant;

use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::pipeline::ViewingPipeline;
use crate::render::{compute_shading, draw_triangle, Coverage, PixelBuffer};
use crate::scene::{Scene, SceneObject};
use crate::stats::RenderStats;
use crate::triangle::Triangle;

/// Switches applied to every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Skip triangles whose front face points away from the camera.
    pub backface_culling: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            backface_culling: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub options: RenderOptions,
}

impl Engine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders `scene` as seen by `camera` into `target`.
    ///
    /// The camera's viewport is ignored here; the projection to pixels uses
    /// the target's own size. Fails fast on the first triangle whose
    /// effective material is invalid, leaving the target partially drawn.
    pub fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        target: &mut PixelBuffer,
    ) -> Result<RenderStats> {
        let start = Instant::now();
        let mut stats = RenderStats {
            frames: 1,
            ..RenderStats::new()
        };

        target.clear(scene.background);
        let pipeline = ViewingPipeline::new(camera, target.width(), target.height());

        for (object_index, object) in scene.objects.iter().enumerate() {
            stats.objects += 1;
            self.render_object(scene, object, object_index, camera, &pipeline, target, &mut stats)?;
        }

        stats.time = start.elapsed();
        Ok(stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn render_object(
        &self,
        scene: &Scene,
        object: &SceneObject,
        object_index: usize,
        camera: &Camera,
        pipeline: &ViewingPipeline,
        target: &mut PixelBuffer,
        stats: &mut RenderStats,
    ) -> Result<()> {
        // Model Space --> World Space
        let world_matrix = object.transform.to_matrix();

        for (triangle_index, triangle) in object.triangles.iter().enumerate() {
            stats.triangles += 1;

            let material = object.material_for(triangle);
            material
                .validate()
                .map_err(|source| RenderError::InvalidMaterial {
                    object: object_index,
                    triangle: triangle_index,
                    source,
                })?;

            let world = triangle.transformed(&world_matrix);

            // The normal is not normalized here, only its direction matters.
            let normal = Triangle::face_normal(&world);
            if self.options.backface_culling && normal.dot(camera.forward) >= 0.0 {
                stats.culled += 1;
                continue;
            }

            let Some(screen) = pipeline.apply(&world, material.clone()) else {
                stats.clipped += 1;
                continue;
            };

            let normal = normal.normalize();
            let colors = [0, 1, 2].map(|i| {
                compute_shading(
                    world[i],
                    normal,
                    material,
                    camera.position,
                    material.base_color(i),
                    &scene.lighting,
                )
            });
            let screen = screen.with_colors(colors);

            let coverage = draw_triangle(&screen, target).map_err(|source| {
                RenderError::InvalidMaterial {
                    object: object_index,
                    triangle: triangle_index,
                    source,
                }
            })?;
            match coverage {
                Coverage::Drawn(pixels) => {
                    stats.rasterized += 1;
                    stats.pixels += pixels;
                }
                Coverage::Degenerate => stats.degenerate += 1,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::material::{Material, ShadingMode};
    use crate::math::vec3::Vec3;
    use crate::mesh;
    use crate::transform::Transform;

    fn camera() -> Camera {
        Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, (64, 64))
    }

    #[test]
    fn empty_scene_clears_to_background() {
        let mut target = PixelBuffer::new(8, 8);
        let scene = Scene::new(Color::BLUE);
        let stats = Engine::default().render(&scene, &camera(), &mut target).unwrap();
        assert_eq!(target.count_pixels(Color::BLUE), 64);
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.triangles, 0);
    }

    #[test]
    fn cube_shows_only_front_faces() {
        let material = Material::solid(ShadingMode::Flat, Color::RED).into_ref();
        let mut scene = Scene::new(Color::BLACK);
        scene.add_object(SceneObject::new(mesh::cube(&material)));

        let mut target = PixelBuffer::new(64, 64);
        let stats = Engine::default().render(&scene, &camera(), &mut target).unwrap();
        assert_eq!(stats.objects, 1);
        assert_eq!(stats.triangles, 12);
        // Looking straight down -Z: only the +Z face is visible, the four
        // side faces are edge-on and culled along with the back face.
        assert_eq!(stats.culled, 10);
        assert_eq!(stats.rasterized, 2);
        assert_eq!(stats.rasterized + stats.rejected(), stats.triangles);
        assert!(target.count_pixels(Color::RED) > 0);
    }

    #[test]
    fn invalid_material_reports_position() {
        let good = Material::solid(ShadingMode::Flat, Color::RED).into_ref();
        let bad = Material::new(ShadingMode::Textured).into_ref();
        let mut scene = Scene::new(Color::BLACK);
        scene.add_object(SceneObject::new(mesh::quad(&good)));
        scene.add_object(
            SceneObject::new(mesh::quad(&good)).with_transform(Transform::at(Vec3::new(0.0, 0.0, -1.0))),
        );
        scene.objects[1].triangles[1].material = bad;

        let mut target = PixelBuffer::new(16, 16);
        let err = Engine::default().render(&scene, &camera(), &mut target).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidMaterial {
                object: 1,
                triangle: 1,
                ..
            }
        ));
    }
}
