//! Camera placement, view and projection transforms.
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer; the camera looks down **-Z** in view space
//!
//! # Orientation
//!
//! Orientation is stored as an explicit frame of three world-space unit
//! vectors (`right`, `up`, `forward`). The look-at helpers build an
//! orthonormal frame; once callers mutate the public fields directly,
//! keeping it orthonormal is their business.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::ray::Ray;

pub const DEFAULT_FOV_DEGREES: f32 = 90.0;
pub const DEFAULT_NEAR: f32 = 1.0;
pub const DEFAULT_FAR: f32 = 100.0;
/// Half the side of the orthographic viewing box, in world units.
pub const DEFAULT_ORTHO_HALF_EXTENT: f32 = 200.0;

/// A camera with world placement and projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub projection: Projection,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Distance from the eye to the near clip plane (positive).
    pub near: f32,
    /// Distance from the eye to the far clip plane (positive).
    pub far: f32,
    pub ortho_half_extent: f32,
    /// Target viewing-plane size in pixels (width, height).
    pub viewport: (u32, u32),
}

impl Camera {
    /// Creates a perspective camera at the origin looking down -Z.
    pub fn new(viewport: (u32, u32)) -> Self {
        Self {
            position: Vec3::ZERO,
            right: Vec3::RIGHT,
            up: Vec3::UP,
            forward: Vec3::FORWARD,
            projection: Projection::default(),
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            ortho_half_extent: DEFAULT_ORTHO_HALF_EXTENT,
            viewport,
        }
    }

    /// Creates a camera at `position` looking toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3, viewport: (u32, u32)) -> Self {
        let mut camera = Self::new(viewport);
        camera.look_at_from(position, target);
        camera
    }

    /// Turns the camera toward a world position, keeping world +Y as up.
    ///
    /// Looking straight up or down falls back to world -Z as the up hint.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = (target - self.position).normalize();
        if forward.magnitude() <= f32::EPSILON {
            return;
        }

        let mut right = forward.cross(Vec3::UP);
        if right.magnitude() <= f32::EPSILON {
            right = forward.cross(Vec3::FORWARD);
        }
        let right = right.normalize();

        self.forward = forward;
        self.right = right;
        self.up = right.cross(forward).normalize();
    }

    /// Moves the camera to `position` and turns it toward `target`.
    pub fn look_at_from(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.look_at(target);
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Moves the camera along its forward direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward * distance;
    }

    /// Moves the camera along its right direction (strafe).
    pub fn move_right(&mut self, distance: f32) {
        self.position += self.right * distance;
    }

    /// Moves the camera along its local up direction.
    pub fn move_up(&mut self, distance: f32) {
        self.position += self.up * distance;
    }

    /// Turns the camera around the world Y axis. Positive turns left.
    pub fn yaw(&mut self, angle: f32) {
        let rotation = Mat4::rotation_y(angle);
        self.forward = rotation.transform_direction(self.forward).normalize();
        self.right = rotation.transform_direction(self.right).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }

    /// Tilts the camera around its right axis. Positive looks up.
    pub fn pitch(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        let forward = (self.forward * c + self.up * s).normalize();
        self.up = self.right.cross(forward).normalize();
        self.forward = forward;
    }

    // =========================================================================
    // Transforms
    // =========================================================================

    /// Width divided by height of the viewport.
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.viewport;
        if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    /// World-to-view matrix.
    ///
    /// The inverse of the camera's world placement: translate by
    /// `-position`, then rotate by the transpose of the orientation frame.
    /// The frame maps view -Z onto `forward`.
    pub fn view_transform(&self) -> Mat4 {
        let rotation = Mat4::from_basis(self.right, self.up, -self.forward);
        rotation.transpose()
            * Mat4::translation(-self.position.x, -self.position.y, -self.position.z)
    }

    /// View-to-clip matrix for the current projection kind.
    pub fn projection_transform(&self) -> Mat4 {
        self.projection.matrix(
            self.fov_y,
            self.aspect_ratio(),
            self.near,
            self.far,
            self.ortho_half_extent,
        )
    }

    /// The world-space ray through the center of `pixel`.
    ///
    /// The viewing plane sits at the near clip distance and is sized from
    /// the field of view: its height is `2 * near * tan(fov_y / 2)`, its
    /// width follows the aspect ratio of `viewing_plane` (in pixels).
    /// Pixel `i` maps to `(i + 0.5) / dimension * size - size / 2`, with
    /// rows growing downward. The ray starts on the viewing plane; it runs
    /// along `forward` for orthographic cameras and away from the eye
    /// through the plane point for perspective ones.
    pub fn viewing_ray(&self, pixel: (u32, u32), viewing_plane: (u32, u32)) -> Ray {
        let (px, py) = pixel;
        let (width, height) = (viewing_plane.0.max(1) as f32, viewing_plane.1.max(1) as f32);

        let plane_height = 2.0 * self.near * (self.fov_y / 2.0).tan();
        let plane_width = plane_height * width / height;

        let offset_x = (px as f32 + 0.5) / width * plane_width - plane_width / 2.0;
        let offset_y = -((py as f32 + 0.5) / height * plane_height - plane_height / 2.0);

        let origin = self.position
            + self.forward * self.near
            + self.right * offset_x
            + self.up * offset_y;

        let direction = match self.projection {
            Projection::Orthographic => self.forward,
            Projection::Perspective => origin - self.position,
        };
        Ray::new(origin, direction)
    }
}

// =============================================================================
// Tests
// =============================================================================
