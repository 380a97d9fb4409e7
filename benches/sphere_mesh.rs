use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planet_demo::sphere::create_uv_sphere;

/// Benchmark: sphere generation across tessellation resolutions
fn bench_uv_sphere_resolutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_sphere");

    for &divisions in &[8u32, 16, 32, 64, 128] {
        group.bench_with_input(
            BenchmarkId::from_parameter(divisions),
            &divisions,
            |b, &n| {
                b.iter(|| create_uv_sphere(black_box(1.0), black_box(n), black_box(n)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark: radius has no effect on cost, only tessellation does
fn bench_uv_sphere_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_sphere_radius");

    for &radius in &[0.5f32, 1.0, 100.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(radius),
            &radius,
            |b, &r| {
                b.iter(|| create_uv_sphere(black_box(r), black_box(32), black_box(32)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_uv_sphere_resolutions, bench_uv_sphere_radius);
criterion_main!(benches);
