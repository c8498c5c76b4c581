//! Scene description consumed by the engine.

use std::rc::Rc;

use crate::colors::Color;
use crate::light::Lighting;
use crate::material::MaterialRef;
use crate::transform::Transform;
use crate::triangle::Triangle;

/// A list of triangles sharing one world placement.
#[derive(Clone, Debug, Default)]
pub struct SceneObject {
    pub triangles: Vec<Triangle>,
    pub transform: Transform,
    /// When set, replaces the material of every triangle in the object.
    pub material_override: Option<MaterialRef>,
}

impl SceneObject {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material_override = Some(material);
        self
    }

    /// The material a triangle of this object is drawn with.
    pub fn material_for<'a>(&'a self, triangle: &'a Triangle) -> &'a MaterialRef {
        self.material_override.as_ref().unwrap_or(&triangle.material)
    }

    /// The material currently shown for the object as a whole.
    fn current_material(&self) -> Option<&MaterialRef> {
        self.material_override
            .as_ref()
            .or_else(|| self.triangles.first().map(|t| &t.material))
    }
}

/// Everything drawn in one frame, in painter's order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub background: Color,
    pub objects: Vec<SceneObject>,
    pub lighting: Lighting,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    pub fn with_lighting(mut self, lighting: Lighting) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn add_object(&mut self, object: SceneObject) -> &mut Self {
        self.objects.push(object);
        self
    }

    /// Number of triangles across all objects.
    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.triangles.len()).sum()
    }

    /// Draws every object with `material`, or with its own materials again.
    pub fn set_material_override_all(&mut self, material: Option<MaterialRef>) {
        for object in &mut self.objects {
            object.material_override = material.clone();
        }
    }

    /// Switches every object to the material after its current one in `library`.
    ///
    /// Materials are matched by handle identity, not by value. An object whose
    /// current material is not in the library starts over at the first entry.
    pub fn cycle_materials(&mut self, library: &[MaterialRef]) {
        if library.is_empty() {
            return;
        }
        for object in &mut self.objects {
            let next = object
                .current_material()
                .and_then(|current| library.iter().position(|m| Rc::ptr_eq(m, current)))
                .map_or(0, |i| (i + 1) % library.len());
            object.material_override = Some(library[next].clone());
        }
    }
}
