//! Criterion benchmarks for hull construction and axis search.
//! Focus sizes: contour points n in {16, 64, 256, 1024}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p recist

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use recist::axes::{major_axis, minor_axis};
use recist::geom2::convex_hull;
use recist::geom2::rand::{draw_contour_radial, ContourCfg, ReplayToken, VertexCount};
use recist::{measure_points, GeomCfg, Vec2};

fn contour(n: usize, seed: u64) -> Vec<Vec2<f64>> {
    let cfg = ContourCfg {
        vertex_count: VertexCount::Fixed(n),
        ..ContourCfg::default()
    };
    draw_contour_radial(cfg, ReplayToken { seed, index: 0 })
}

fn bench_axes(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let mut group = c.benchmark_group("axes");
    for &n in &[16usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || contour(n, 43),
                |pts| {
                    let _h = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("major_minor", n), &n, |b, &n| {
            let hull = convex_hull(&contour(n, 44));
            b.iter(|| {
                let major = major_axis(&hull).unwrap();
                let _minor = minor_axis(&hull, &major, &cfg);
            })
        });

        group.bench_with_input(BenchmarkId::new("measure_points", n), &n, |b, &n| {
            let pts = contour(n, 45);
            b.iter(|| {
                let _res = measure_points(&pts, &cfg);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_axes);
criterion_main!(benches);
