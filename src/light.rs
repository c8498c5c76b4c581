//! Light sources.

use crate::colors::Color;
use crate::math::vec3::Vec3;

/// What kind of light a [`Light`] is and where it shines from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light reaching every surface regardless of orientation.
    Ambient,
    /// A light "at infinity" shining along a direction, like the sun.
    /// The direction is the one the light travels in, not where it comes from.
    Directional(Vec3),
    /// A light radiating in all directions from a world-space position.
    Point(Vec3),
}

/// A colored light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Color,
    pub kind: LightKind,
}

impl Light {
    pub fn ambient(color: Color) -> Self {
        Self {
            color,
            kind: LightKind::Ambient,
        }
    }

    /// Create a directional light. The direction is normalized automatically.
    pub fn directional(color: Color, direction: Vec3) -> Self {
        Self {
            color,
            kind: LightKind::Directional(direction.normalize()),
        }
    }

    pub fn point(color: Color, position: Vec3) -> Self {
        Self {
            color,
            kind: LightKind::Point(position),
        }
    }

    /// Unit vector from `vertex` toward the light, or `None` for ambient light.
    pub fn direction_from(&self, vertex: Vec3) -> Option<Vec3> {
        match self.kind {
            LightKind::Ambient => None,
            LightKind::Directional(direction) => Some(-direction),
            LightKind::Point(position) => Some((position - vertex).normalize()),
        }
    }
}

/// Whether lighting runs at all, and with which lights.
///
/// `Disabled` skips lighting entirely and keeps the base vertex colors.
/// `Enabled` with an empty list treats every vertex as fully lit by white,
/// without emissive, so it draws the same pixels as `Disabled`. They differ
/// only in intent: the list may gain lights between frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lighting {
    #[default]
    Disabled,
    Enabled(Vec<Light>),
}

impl Lighting {
    /// The active lights, or `None` when lighting is disabled.
    pub fn lights(&self) -> Option<&[Light]> {
        match self {
            Lighting::Disabled => None,
            Lighting::Enabled(lights) => Some(lights),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Lighting::Enabled(_))
    }
}

impl From<Option<Vec<Light>>> for Lighting {
    fn from(lights: Option<Vec<Light>>) -> Self {
        lights.map_or(Lighting::Disabled, Lighting::Enabled)
    }
}
