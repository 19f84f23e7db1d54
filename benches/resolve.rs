// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Bimconvert Contributors

//! Placement resolution and predicate benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{Point3, Vector3};

use bimconvert::geometry::predicates::newells_normal;
use bimconvert::{resolve_placement, AxisPlacement, ObjectPlacement};

fn chain(depth: usize) -> ObjectPlacement {
    let node = || AxisPlacement::ThreeD {
        origin: Point3::new(1.0, 0.5, 0.25),
        axis: Some(Vector3::new(0.0, 1.0, 1.0)),
        ref_direction: None,
    };
    let mut placement = ObjectPlacement::root(node());
    for _ in 1..depth {
        placement = ObjectPlacement::relative(node(), placement);
    }
    placement
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_placement");

    for depth in [1usize, 16, 128, 1024] {
        let placement = chain(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &placement, |b, p| {
            b.iter(|| resolve_placement(black_box(p), black_box(1e-9)).unwrap());
        });
    }

    group.finish();
}

fn bench_newells_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("newells_normal");

    for count in [4usize, 64, 1024] {
        let loop_points: Vec<Point3<f64>> = (0..count)
            .map(|i| {
                let a = i as f64 / count as f64 * std::f64::consts::TAU;
                Point3::new(a.cos(), a.sin(), 0.0)
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("points", count), &loop_points, |b, pts| {
            b.iter(|| newells_normal(black_box(pts)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_newells_normal);
criterion_main!(benches);
