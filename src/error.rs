//! Error types.
//!
//! Rendering itself never fails for geometric reasons: triangles outside the
//! view volume, facing away, or with zero area are skipped and counted in
//! [`RenderStats`](crate::stats::RenderStats). Errors are reserved for broken
//! caller contracts, such as a textured material without a texture.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A material whose fields do not satisfy its shading mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialError {
    /// Textured shading without a texture.
    MissingTexture,
    /// Textured shading without per-vertex texture coordinates.
    MissingTextureCoords,
}

impl Display for MaterialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MaterialError::MissingTexture => f.write_str("textured material has no texture"),
            MaterialError::MissingTextureCoords => {
                f.write_str("textured material has no texture coordinates")
            }
        }
    }
}

impl Error for MaterialError {}

/// Error returned by [`Engine::render`](crate::engine::Engine::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A triangle's effective material is unusable.
    InvalidMaterial {
        object: usize,
        triangle: usize,
        source: MaterialError,
    },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidMaterial {
                object, triangle, ..
            } => write!(f, "invalid material on object {object}, triangle {triangle}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::InvalidMaterial { source, .. } => Some(source),
        }
    }
}

/// Result of a render call.
pub type Result<T> = std::result::Result<T, RenderError>;
