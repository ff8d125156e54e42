// Copyright 2026 the Morph Targets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of per-point distance evaluation for each built-in target.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use morph_targets::{Point, PointCloud, Segment, ShapeRegistry, Target};

fn sample_data() -> PointCloud {
    PointCloud::new((0..142).map(|i| {
        let t = f64::from(i) * 0.1;
        Point::new(50.0 + 30.0 * t.cos(), 50.0 + 20.0 * (2.0 * t).sin())
    }))
    .unwrap()
}

fn bench_segment(cc: &mut Criterion) {
    let seg = Segment::new((0.0, 10.0), (100.0, 10.0));
    for (label, pt) in [
        ("inside", Point::new(50.0, 20.0)),
        ("outside", Point::new(-10.0, 10.0)),
    ] {
        cc.bench_with_input(BenchmarkId::new("segment distance", label), &pt, |bb, pt| {
            bb.iter(|| black_box(seg).distance(black_box(*pt)));
        });
    }
}

fn bench_targets(cc: &mut Criterion) {
    let data = sample_data();
    let registry = ShapeRegistry::builtin();
    let p = Point::new(37.0, 61.0);

    for (name, target) in registry.build_all(&data) {
        cc.bench_with_input(BenchmarkId::new("target distance", name), &target, |bb, t| {
            bb.iter(|| t.distance(black_box(p)));
        });
    }
}

criterion_group!(benches, bench_segment, bench_targets);
criterion_main!(benches);
