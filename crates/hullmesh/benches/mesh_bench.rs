//! Criterion benchmarks for the flood-fill triangulation and its predicate.
//! Focus sizes: n in {10, 25, 50, 100, 200}; the engine is quadratic per edge
//! crossing, so larger inputs are left out.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullmesh::api::{
    draw_points, incircle, triangulate, CloudReplay, PointCloudCfg, PointLayout,
};
use hullmesh::Point;

fn bench_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh");
    group.sample_size(20);
    for &n in &[10usize, 25, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("triangulate_uniform", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let cfg = PointCloudCfg {
                        count: n,
                        ..PointCloudCfg::default()
                    };
                    draw_points(cfg, CloudReplay { seed: 51, index: 0 })
                },
                |pts| {
                    let _m = triangulate(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        // Cocircular lattice quads: every crossing hits on-circle ties.
        group.bench_with_input(BenchmarkId::new("triangulate_grid", n), &n, |b, &n| {
            let side = (n as f64).sqrt().ceil() as usize;
            b.iter_batched(
                || {
                    let cfg = PointCloudCfg {
                        count: n,
                        layout: PointLayout::Grid {
                            cols: side,
                            rows: side,
                            spacing: 1.0,
                        },
                        integer_coords: true,
                    };
                    draw_points(cfg, CloudReplay { seed: 52, index: 0 })
                },
                |pts| {
                    let _m = triangulate(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_incircle(c: &mut Criterion) {
    let (a, b, q) = (Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::new(-1.0, 0.0));
    let p = Point::new(0.25, -0.5);
    c.bench_function("incircle", |bch| {
        bch.iter(|| incircle(std::hint::black_box(a), b, q, std::hint::black_box(p)))
    });
}

criterion_group!(benches, bench_mesh, bench_incircle);
criterion_main!(benches);
