//! Projection kinds.

use std::fmt;

use crate::math::mat4::Mat4;

/// How view space is flattened onto the image plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Parallel projection of a fixed-size box; distance does not shrink objects.
    Orthographic,
    /// Pinhole camera with a vertical field of view.
    #[default]
    Perspective,
}

impl Projection {
    /// Toggles between the two kinds.
    pub fn next(self) -> Self {
        match self {
            Projection::Orthographic => Projection::Perspective,
            Projection::Perspective => Projection::Orthographic,
        }
    }

    /// Builds the projection matrix for these parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians (perspective only)
    /// * `aspect_ratio` - Width divided by height (perspective only)
    /// * `near`, `far` - Positive clip distances in front of the camera
    /// * `half_extent` - Half the side of the orthographic box
    pub fn matrix(self, fov_y: f32, aspect_ratio: f32, near: f32, far: f32, half_extent: f32) -> Mat4 {
        match self {
            Projection::Orthographic => Mat4::orthographic(
                -half_extent,
                half_extent,
                -half_extent,
                half_extent,
                near,
                far,
            ),
            Projection::Perspective => Mat4::perspective(fov_y, aspect_ratio, near, far),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Orthographic => write!(f, "Orthographic"),
            Projection::Perspective => write!(f, "Perspective"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    #[test]
    fn next_toggles() {
        assert_eq!(Projection::Perspective.next(), Projection::Orthographic);
        assert_eq!(Projection::Orthographic.next().next(), Projection::Orthographic);
    }

    #[test]
    fn orthographic_ignores_fov() {
        let a = Projection::Orthographic.matrix(0.5, 1.0, 1.0, 100.0, 200.0);
        let b = Projection::Orthographic.matrix(1.5, 2.0, 1.0, 100.0, 200.0);
        assert_eq!(a, b);
        let edge = a * Vec4::new(200.0, 100.0, -50.0, 1.0);
        assert_relative_eq!(edge.x, 1.0);
        assert_relative_eq!(edge.y, 0.5);
        assert_relative_eq!(edge.w, 1.0);
    }
}
