//! Surface materials and shading modes.

use std::fmt;
use std::rc::Rc;

use crate::colors::Color;
use crate::error::MaterialError;
use crate::math::vec2::Vec2;
use crate::texture::Texture;

/// Shared, read-only material handle.
///
/// Triangles reference materials by handle so that swapping the material of
/// a whole object is a pointer assignment and identity can be compared with
/// [`Rc::ptr_eq`].
pub type MaterialRef = Rc<Material>;

/// How a triangle's pixels get their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Edges only, in vertex 0's color.
    Wireframe,
    /// Edges only, colors interpolated along each edge.
    WireframeVertexColorInterpolation,
    /// Filled with vertex 0's color.
    Flat,
    /// Filled, vertex colors blended with barycentric weights.
    FaceVertexColorInterpolation,
    /// Filled with per-vertex lit colors, blended across the face.
    #[default]
    Gouraud,
    /// Like Gouraud, additionally modulated by a texture lookup.
    Textured,
    /// Lit with the material's ambient, diffuse and specular colors.
    Material,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 7] = [
        ShadingMode::Wireframe,
        ShadingMode::WireframeVertexColorInterpolation,
        ShadingMode::Flat,
        ShadingMode::FaceVertexColorInterpolation,
        ShadingMode::Gouraud,
        ShadingMode::Textured,
        ShadingMode::Material,
    ];

    /// The mode after `self` in [`ShadingMode::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn is_wireframe(self) -> bool {
        matches!(
            self,
            ShadingMode::Wireframe | ShadingMode::WireframeVertexColorInterpolation
        )
    }
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShadingMode::Wireframe => "Wireframe",
            ShadingMode::WireframeVertexColorInterpolation => "Wireframe (vertex colors)",
            ShadingMode::Flat => "Flat",
            ShadingMode::FaceVertexColorInterpolation => "Face (vertex colors)",
            ShadingMode::Gouraud => "Gouraud",
            ShadingMode::Textured => "Textured",
            ShadingMode::Material => "Material",
        };
        f.write_str(name)
    }
}

/// Surface description shared by the triangles that use it.
#[derive(Debug, Clone)]
pub struct Material {
    pub shading: ShadingMode,
    /// Per-vertex base colors, in triangle vertex order.
    pub vertex_colors: Option<[Color; 3]>,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub emissive: Color,
    /// Phong exponent. Specular highlights are only computed above 1.
    pub specular_power: f32,
    pub texture: Option<Rc<Texture>>,
    /// Per-vertex texture coordinates, in triangle vertex order.
    pub texture_coords: Option<[Vec2; 3]>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shading: ShadingMode::default(),
            vertex_colors: None,
            ambient: Color::WHITE,
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            emissive: Color::BLACK,
            specular_power: 0.0,
            texture: None,
            texture_coords: None,
        }
    }
}

impl Material {
    pub fn new(shading: ShadingMode) -> Self {
        Self {
            shading,
            ..Self::default()
        }
    }

    /// A material filled with a single color.
    pub fn solid(shading: ShadingMode, color: Color) -> Self {
        Self {
            shading,
            diffuse: color,
            ..Self::default()
        }
    }

    pub fn with_vertex_colors(mut self, colors: [Color; 3]) -> Self {
        self.vertex_colors = Some(colors);
        self
    }

    pub fn with_texture(mut self, texture: Rc<Texture>, coords: [Vec2; 3]) -> Self {
        self.texture = Some(texture);
        self.texture_coords = Some(coords);
        self
    }

    /// Sets the colors used by [`ShadingMode::Material`] lighting.
    pub fn with_surface(mut self, ambient: Color, diffuse: Color, specular: Color) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    pub fn with_specular_power(mut self, power: f32) -> Self {
        self.specular_power = power;
        self
    }

    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    /// Wraps the material in a shared handle.
    pub fn into_ref(self) -> MaterialRef {
        Rc::new(self)
    }

    /// The unlit color of vertex `index` (0..3).
    ///
    /// Explicit vertex colors win. Otherwise the diffuse color is used,
    /// except in [`ShadingMode::Material`] where lighting already carries
    /// the material colors and the base is white.
    pub fn base_color(&self, index: usize) -> Color {
        match (self.vertex_colors, self.shading) {
            (Some(colors), _) => colors[index],
            (None, ShadingMode::Material) => Color::WHITE,
            (None, _) => self.diffuse,
        }
    }

    /// Checks the preconditions of the material's shading mode.
    ///
    /// Textured materials must carry both a texture and texture coordinates.
    pub fn validate(&self) -> Result<(), MaterialError> {
        if self.shading == ShadingMode::Textured {
            if self.texture.is_none() {
                return Err(MaterialError::MissingTexture);
            }
            if self.texture_coords.is_none() {
                return Err(MaterialError::MissingTextureCoords);
            }
        }
        Ok(())
    }
}
