use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softlit::prelude::*;
use softlit::render::{draw_triangle, ScreenTriangle};
use softlit::texture::checkerboard;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ]
}

fn medium_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ]
}

fn large_triangle() -> [Vec3; 3] {
    [
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ]
}

fn material_for(mode: ShadingMode) -> MaterialRef {
    let material = Material::new(mode);
    let material = match mode {
        ShadingMode::Textured => {
            let texture = Rc::new(checkerboard(64, 8, Color::WHITE, Color::gray(0.3)));
            let uvs = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];
            material.with_texture(texture, uvs)
        }
        _ => material,
    };
    material.into_ref()
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let colors = [Color::RED, Color::GREEN, Color::BLUE];

    for mode in ShadingMode::ALL {
        let material = material_for(mode);
        for (size, points) in [
            ("small", small_triangle()),
            ("medium", medium_triangle()),
            ("large", large_triangle()),
        ] {
            let triangle = ScreenTriangle::new(points, material.clone()).with_colors(colors);
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), size),
                &triangle,
                |b, tri| {
                    let mut buffer = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                    b.iter(|| draw_triangle(black_box(tri), &mut buffer));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_cube_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube_scene");

    let camera = Camera::looking_at(
        Vec3::new(3.0, 3.0, 6.0),
        Vec3::ZERO,
        (BUFFER_WIDTH, BUFFER_HEIGHT),
    );
    let lights = vec![
        Light::ambient(Color::gray(0.2)),
        Light::directional(Color::WHITE, Vec3::new(-1.0, -1.0, -1.0)),
        Light::point(Color::gray(0.5), Vec3::new(0.0, 4.0, 4.0)),
    ];

    for (name, lighting) in [
        ("unlit", Lighting::Disabled),
        ("lit", Lighting::Enabled(lights)),
    ] {
        let material = Material::solid(ShadingMode::Gouraud, Color::RED)
            .with_specular_power(16.0)
            .into_ref();
        let mut scene = Scene::new(Color::BLACK).with_lighting(lighting);
        scene.add_object(SceneObject::new(mesh::cube(&material)));

        let engine = Engine::default();
        group.bench_function(name, |b| {
            let mut target = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| engine.render(black_box(&scene), &camera, &mut target));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_cube_scene);
criterion_main!(benches);
