//! World -> view -> clip -> screen transformation of triangles.
//!
//! The pipeline is built once per frame from the camera and the target
//! size, then applied to every world-space triangle.
//!
//! # Clipping
//!
//! Only the near and far planes are tested, per vertex, in view space. A
//! triangle with *any* vertex outside `[-far, -near]` is rejected whole; no
//! polygon splitting is done, so triangles straddling a plane disappear.
//! Side planes are not tested at all: off-screen pixels are dropped by the
//! pixel buffer.

use crate::camera::Camera;
use crate::material::MaterialRef;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::render::ScreenTriangle;

/// Precomputed per-frame transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingPipeline {
    view: Mat4,
    projection: Mat4,
    screen: Mat4,
    /// View-space z of the near plane (`-near`).
    near_z: f32,
    /// View-space z of the far plane (`-far`).
    far_z: f32,
}

impl ViewingPipeline {
    /// Builds the pipeline for `camera` drawing into a `width` x `height` target.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        Self {
            view: camera.view_transform(),
            projection: camera.projection_transform(),
            screen: Mat4::screen(width as f32, height as f32),
            near_z: -camera.near,
            far_z: -camera.far,
        }
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn screen(&self) -> &Mat4 {
        &self.screen
    }

    /// World point to homogeneous view-space point.
    pub fn to_view(&self, world: Vec3) -> Vec4 {
        self.view * Vec4::point(world)
    }

    /// Whether a view-space z lies between the near and far planes, inclusive.
    pub fn in_depth_range(&self, z_view: f32) -> bool {
        self.near_z >= z_view && z_view >= self.far_z
    }

    /// Projects a view-space point to pixel coordinates.
    ///
    /// z keeps the normalized device depth.
    pub fn project_to_screen(&self, view: Vec4) -> Vec3 {
        let ndc = (self.projection * view).perspective_divide();
        (self.screen * ndc).to_vec3()
    }

    /// Transforms a world-space triangle to screen space.
    ///
    /// Returns `None` when any vertex falls outside the near/far range.
    /// Vertex colors of the result are left black for the lighting stage
    /// to fill in.
    pub fn apply(&self, world: &[Vec3; 3], material: MaterialRef) -> Option<ScreenTriangle> {
        let view = world.map(|v| self.to_view(v));
        if !view.iter().all(|v| self.in_depth_range(v.z)) {
            return None;
        }
        let points = view.map(|v| self.project_to_screen(v));
        Some(ScreenTriangle::new(points, material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, ShadingMode};
    use crate::projection::Projection;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, (200, 100))
    }

    fn material() -> MaterialRef {
        Material::new(ShadingMode::Flat).into_ref()
    }

    #[test]
    fn point_on_axis_maps_to_center_pixel() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        let p = pipeline.project_to_screen(pipeline.to_view(Vec3::ZERO));
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn clip_top_left_maps_to_origin_pixel() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        let p = pipeline.screen().transform_point(Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn up_in_world_is_up_on_screen() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        let above = pipeline.project_to_screen(pipeline.to_view(Vec3::new(0.0, 1.0, 0.0)));
        let right = pipeline.project_to_screen(pipeline.to_view(Vec3::new(1.0, 0.0, 0.0)));
        assert!(above.y < 50.0);
        assert!(right.x > 100.0);
    }

    #[test]
    fn perspective_shrinks_with_distance() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        let near = pipeline.project_to_screen(pipeline.to_view(Vec3::new(0.0, 1.0, 0.0)));
        let far = pipeline.project_to_screen(pipeline.to_view(Vec3::new(0.0, 1.0, -10.0)));
        assert!(far.y > near.y);
        assert!(far.y < 50.0);
    }

    #[test]
    fn orthographic_keeps_size_with_distance() {
        let mut camera = camera();
        camera.projection = Projection::Orthographic;
        let pipeline = ViewingPipeline::new(&camera, 200, 100);
        let near = pipeline.project_to_screen(pipeline.to_view(Vec3::new(0.0, 100.0, 0.0)));
        let far = pipeline.project_to_screen(pipeline.to_view(Vec3::new(0.0, 100.0, -10.0)));
        assert_relative_eq!(near.y, far.y, epsilon = 1e-4);
        // 100 units above the axis is a quarter of the 400-unit box.
        assert_relative_eq!(near.y, 25.0, epsilon = 1e-4);
    }

    #[test]
    fn rejects_triangle_with_any_vertex_beyond_far() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        let inside = [Vec3::ZERO, Vec3::RIGHT, Vec3::UP];
        assert!(pipeline.apply(&inside, material()).is_some());

        // Camera at z=5 with far=100: z=-96 is 101 units away.
        let straddling = [Vec3::ZERO, Vec3::RIGHT, Vec3::new(0.0, 1.0, -96.0)];
        assert!(pipeline.apply(&straddling, material()).is_none());
    }

    #[test]
    fn rejects_triangle_crossing_near_plane() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        // z=4.5 is only 0.5 in front of the camera, closer than near=1.
        let tri = [Vec3::ZERO, Vec3::RIGHT, Vec3::new(0.0, 1.0, 4.5)];
        assert!(pipeline.apply(&tri, material()).is_none());
    }

    #[test]
    fn depth_range_is_inclusive() {
        let pipeline = ViewingPipeline::new(&camera(), 200, 100);
        assert!(pipeline.in_depth_range(-1.0));
        assert!(pipeline.in_depth_range(-100.0));
        assert!(!pipeline.in_depth_range(-0.999));
        assert!(!pipeline.in_depth_range(-100.001));
    }
}
