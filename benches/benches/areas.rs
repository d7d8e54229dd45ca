// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hotmap_areas::{AreaRecord, AreaResolver, AreaSet, TargetGroup};
use kurbo::Point;

/// A grid of `side * side` hexagon-ish polygons covering a 4096x4096 image.
fn grid_records(side: usize) -> Vec<AreaRecord> {
    let cell = 4096.0 / side as f64;
    let mut out = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let x = col as f64 * cell;
            let y = row as f64 * cell;
            let q = cell * 0.25;
            out.push(AreaRecord::new(
                (row * side + col) as i32,
                (col % 3) as i32,
                [
                    (x + q, y),
                    (x + cell - q, y),
                    (x + cell, y + cell * 0.5),
                    (x + cell - q, y + cell),
                    (x + q, y + cell),
                    (x, y + cell * 0.5),
                ],
            ));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("areas/build");
    for side in [8usize, 32, 64] {
        let records = grid_records(side);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &records, |b, r| {
            b.iter(|| black_box(AreaSet::from_records(r.iter().cloned()).unwrap()));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("areas/hit_test");
    let resolver = AreaResolver::default();
    for side in [8usize, 32, 64] {
        let areas = AreaSet::from_records(grid_records(side)).unwrap();
        // Points along the diagonal: a mix of early, late and gap hits.
        let probes: Vec<Point> = (0..64)
            .map(|i| {
                let t = f64::from(i) / 64.0 * 4096.0;
                Point::new(t, t * 0.97)
            })
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &areas, |b, areas| {
            b.iter(|| {
                for &pt in &probes {
                    black_box(resolver.hit_test(areas, pt));
                }
            });
        });
    }
    group.finish();
}

fn bench_id_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("areas/resolve_store_index");
    let areas = AreaSet::from_records(grid_records(64)).unwrap();
    let last = (areas.len() - 1) as i32;
    group.bench_function("first", |b| {
        b.iter(|| black_box(areas.resolve_store_index(black_box(0), TargetGroup::Any)));
    });
    group.bench_function("last", |b| {
        b.iter(|| black_box(areas.resolve_store_index(black_box(last), TargetGroup::Any)));
    });
    group.bench_function("indices_for_id", |b| {
        b.iter(|| black_box(areas.indices_for_id(black_box(last)).len()));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_hit_test, bench_id_lookup);
criterion_main!(benches);
