//! Procedural meshes.

use crate::material::MaterialRef;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Indices into [`CUBE_VERTICES`], counter-clockwise seen from outside.
pub const CUBE_FACES: [[usize; 3]; 12] = [
    // Front (+Z)
    [4, 5, 6],
    [4, 6, 7],
    // Back (-Z)
    [1, 0, 3],
    [1, 3, 2],
    // Right (+X)
    [5, 1, 2],
    [5, 2, 6],
    // Left (-X)
    [0, 4, 7],
    [0, 7, 3],
    // Top (+Y)
    [7, 6, 2],
    [7, 2, 3],
    // Bottom (-Y)
    [0, 1, 5],
    [0, 5, 4],
];

/// A 2x2x2 cube centered at the origin with outward-facing triangles.
pub fn cube(material: &MaterialRef) -> Vec<Triangle> {
    CUBE_FACES
        .iter()
        .map(|face| Triangle::new(face.map(|i| CUBE_VERTICES[i]), material.clone()))
        .collect()
}

/// A 2x2 square in the XY plane facing +Z.
pub fn quad(material: &MaterialRef) -> Vec<Triangle> {
    let [a, b, c, d] = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ];
    vec![
        Triangle::new([a, b, c], material.clone()),
        Triangle::new([a, c, d], material.clone()),
    ]
}
