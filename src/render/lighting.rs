//! Per-vertex lighting.
//!
//! Lighting is evaluated in world space at each triangle vertex and the
//! results are interpolated by the rasterizer (Gouraud style). The model is
//! ambient + Lambertian diffuse + Phong specular, summed over all lights
//! without normalization.

use crate::colors::Color;
use crate::light::{Light, LightKind, Lighting};
use crate::material::{Material, ShadingMode};
use crate::math::vec3::Vec3;

/// Total light arriving at `vertex` and leaving toward `viewer`.
///
/// The result is unbounded; clamping is up to the caller. An empty light
/// list means "lighting on, nothing to compute" and yields full white.
///
/// # Arguments
/// * `vertex` - World-space vertex position
/// * `normal` - Unit surface normal at the vertex
/// * `viewer` - World-space eye position, used for specular highlights
pub fn compute_lighting(
    vertex: Vec3,
    normal: Vec3,
    material: &Material,
    viewer: Vec3,
    lights: &[Light],
) -> Color {
    if lights.is_empty() {
        return Color::WHITE;
    }

    let uses_material = material.shading == ShadingMode::Material;
    let surface = |light: Color, surface: Color| {
        if uses_material {
            light.modulate(surface)
        } else {
            light
        }
    };

    let mut total = if uses_material {
        material.emissive
    } else {
        Color::BLACK
    };
    let to_viewer = (viewer - vertex).normalize();

    for light in lights {
        let to_light = match (light.kind, light.direction_from(vertex)) {
            (LightKind::Ambient, _) | (_, None) => {
                total += surface(light.color, material.ambient);
                continue;
            }
            (_, Some(dir)) => dir,
        };

        let diffuse = normal.dot(to_light).max(0.0);
        total += surface(light.color.scale(diffuse), material.diffuse);

        if material.specular_power > 1.0 {
            let reflected = to_light.reflect(normal);
            let specular = reflected
                .dot(to_viewer)
                .max(0.0)
                .powf(material.specular_power);
            total += surface(light.color.scale(specular), material.specular);
        }
    }

    total
}

/// Final color of a vertex: its base color filtered by the lighting.
///
/// With lighting disabled the base color passes through untouched.
/// Otherwise it is multiplied by [`compute_lighting`] and clamped to `[0, 1]`.
pub fn compute_shading(
    vertex: Vec3,
    normal: Vec3,
    material: &Material,
    viewer: Vec3,
    base_color: Color,
    lighting: &Lighting,
) -> Color {
    match lighting.lights() {
        None => base_color,
        Some(lights) => base_color
            .modulate(compute_lighting(vertex, normal, material, viewer, lights))
            .clamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWER: Vec3 = Vec3::new(0.0, 0.0, 10.0);

    fn shade(material: &Material, normal: Vec3, lighting: &Lighting) -> Color {
        compute_shading(
            Vec3::ZERO,
            normal,
            material,
            VIEWER,
            material.base_color(0),
            lighting,
        )
    }

    #[test]
    fn disabled_lighting_passes_base_color_through() {
        let material = Material::solid(ShadingMode::Gouraud, Color::new(0.2, 0.4, 0.6));
        let color = shade(&material, Vec3::BACK, &Lighting::Disabled);
        assert_eq!(color, Color::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn empty_light_list_is_full_white() {
        let material = Material::solid(ShadingMode::Flat, Color::new(0.2, 0.4, 0.6));
        let color = shade(&material, Vec3::BACK, &Lighting::Enabled(vec![]));
        assert_eq!(color, Color::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn ambient_light_filters_base_color() {
        let material = Material::solid(ShadingMode::Gouraud, Color::new(0.5, 1.0, 0.8));
        let lighting = Lighting::Enabled(vec![Light::ambient(Color::new(0.5, 0.25, 1.0))]);
        let color = shade(&material, Vec3::BACK, &lighting);
        assert_relative_eq!(color.r, 0.25);
        assert_relative_eq!(color.g, 0.25);
        assert_relative_eq!(color.b, 0.8);
    }

    #[test]
    fn ambient_uses_material_ambient_in_material_mode() {
        let material = Material::new(ShadingMode::Material).with_surface(
            Color::new(0.1, 0.2, 0.3),
            Color::WHITE,
            Color::WHITE,
        );
        let lighting = Lighting::Enabled(vec![Light::ambient(Color::WHITE)]);
        let color = shade(&material, Vec3::BACK, &lighting);
        assert_eq!(color, Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn diffuse_follows_lambert() {
        let material = Material::solid(ShadingMode::Gouraud, Color::WHITE);
        // Light travelling straight down onto a surface tilted 60 degrees.
        let light = Light::directional(Color::WHITE, Vec3::DOWN);
        let normal = Vec3::new(60f32.to_radians().sin(), 60f32.to_radians().cos(), 0.0);
        let lit = compute_lighting(Vec3::ZERO, normal, &material, VIEWER, &[light]);
        assert_relative_eq!(lit.r, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn back_facing_light_contributes_nothing() {
        let material = Material::solid(ShadingMode::Gouraud, Color::WHITE);
        let light = Light::directional(Color::WHITE, Vec3::UP);
        let lit = compute_lighting(Vec3::ZERO, Vec3::UP, &material, VIEWER, &[light]);
        assert_eq!(lit, Color::BLACK);
    }

    #[test]
    fn point_light_direction_depends_on_vertex() {
        let material = Material::solid(ShadingMode::Gouraud, Color::WHITE);
        let light = Light::point(Color::WHITE, Vec3::new(0.0, 1.0, 0.0));
        let below = compute_lighting(Vec3::ZERO, Vec3::UP, &material, VIEWER, &[light]);
        let aside = compute_lighting(Vec3::new(1.0, 0.0, 0.0), Vec3::UP, &material, VIEWER, &[light]);
        assert_relative_eq!(below.r, 1.0);
        assert_relative_eq!(aside.r, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn specular_needs_power_above_one() {
        let light = Light::directional(Color::WHITE, Vec3::FORWARD);
        let dull = Material::solid(ShadingMode::Gouraud, Color::WHITE).with_specular_power(1.0);
        let shiny = dull.clone().with_specular_power(16.0);

        let dull_lit = compute_lighting(Vec3::ZERO, Vec3::BACK, &dull, VIEWER, &[light]);
        let shiny_lit = compute_lighting(Vec3::ZERO, Vec3::BACK, &shiny, VIEWER, &[light]);
        // Mirror reflection straight back at the viewer: full highlight.
        assert_relative_eq!(dull_lit.r, 1.0);
        assert_relative_eq!(shiny_lit.r, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn contributions_are_unbounded_until_shaded() {
        let material = Material::solid(ShadingMode::Gouraud, Color::WHITE);
        let lights = [Light::ambient(Color::WHITE), Light::ambient(Color::WHITE)];
        let lit = compute_lighting(Vec3::ZERO, Vec3::UP, &material, VIEWER, &lights);
        assert_eq!(lit, Color::gray(2.0));

        let shaded = shade(&material, Vec3::UP, &Lighting::Enabled(lights.to_vec()));
        assert_eq!(shaded, Color::WHITE);
    }
}
