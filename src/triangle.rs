//! Triangles as submitted to the renderer.

use crate::material::MaterialRef;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// A triangle in an object's local space.
///
/// Vertices wind counter-clockwise when seen from the front. The surface
/// normal is derived from that winding, never stored.
#[derive(Clone, Debug)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub material: MaterialRef,
}

impl Triangle {
    pub fn new(vertices: [Vec3; 3], material: MaterialRef) -> Self {
        Self { vertices, material }
    }

    /// Unnormalized normal, `(v1 - v0) x (v2 - v0)`.
    pub fn face_normal(vertices: &[Vec3; 3]) -> Vec3 {
        let [v0, v1, v2] = *vertices;
        (v1 - v0).cross(v2 - v0)
    }

    /// Unit normal of the front face.
    pub fn normal(&self) -> Vec3 {
        Self::face_normal(&self.vertices).normalize()
    }

    /// The vertices mapped through `matrix` (e.g. local to world).
    pub fn transformed(&self, matrix: &Mat4) -> [Vec3; 3] {
        self.vertices.map(|v| matrix.transform_point(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, ShadingMode};

    #[test]
    fn normal_follows_ccw_winding() {
        let material = Material::new(ShadingMode::Flat).into_ref();
        let tri = Triangle::new(
            [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
            material,
        );
        assert_eq!(tri.normal(), Vec3::BACK);

        let mut flipped = tri.clone();
        flipped.vertices.swap(1, 2);
        assert_eq!(flipped.normal(), Vec3::FORWARD);
    }

    #[test]
    fn transformed_applies_matrix() {
        let material = Material::new(ShadingMode::Flat).into_ref();
        let tri = Triangle::new([Vec3::ZERO, Vec3::RIGHT, Vec3::UP], material);
        let moved = tri.transformed(&Mat4::translation(0.0, 0.0, -3.0));
        assert_eq!(moved[1], Vec3::new(1.0, 0.0, -3.0));
    }
}
