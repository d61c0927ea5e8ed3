//! Scene generation throughput per catalog shape.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vsepr::catalog::Catalog;
use vsepr::scene::{AngleArc, SceneGenerator, TeardropProfile};

fn teardrop_benchmark(c: &mut Criterion) {
    let profile = TeardropProfile::DEFAULT;
    c.bench_function("teardrop_radius", |b| {
        b.iter(|| black_box(profile.radius(black_box(0.65))))
    });
}

fn arc_benchmark(c: &mut Criterion) {
    c.bench_function("angle_arc_30_segments", |b| {
        b.iter(|| {
            let arc = AngleArc::between(
                black_box(Vec3::new(2.5, 0.0, 0.0)),
                black_box(Vec3::new(-1.25, 2.165, 0.0)),
                1.1,
            );
            black_box(arc.points(30))
        })
    });
}

fn scene_benchmark(c: &mut Criterion) {
    let generator = SceneGenerator::default();
    let mut group = c.benchmark_group("generate_scene");

    for (key, shape) in Catalog::global().iter() {
        group.bench_function(key.to_string(), |b| {
            b.iter(|| black_box(generator.generate_scene(black_box(shape), true)))
        });
    }
    group.finish();
}

criterion_group!(benches, teardrop_benchmark, arc_benchmark, scene_benchmark);
criterion_main!(benches);
