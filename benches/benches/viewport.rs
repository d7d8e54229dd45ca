// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hotmap_view::Viewport;
use kurbo::{Point, Size, Vec2};

fn fitted() -> Viewport {
    let mut vp = Viewport::new();
    vp.initialize(Size::new(8000.0, 6000.0), Size::new(1280.0, 720.0));
    vp
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    // A drag: many small pans, each clamped.
    group.bench_function("pan_by_x100", |b| {
        let mut vp = fitted();
        vp.zoom_by(4.0, Point::new(4000.0, 3000.0));
        b.iter(|| {
            for i in 0..100 {
                let dx = if i % 2 == 0 { 3.0 } else { -3.0 };
                vp.pan_by(black_box(Vec2::new(dx, 1.5)));
            }
        });
    });

    // A pinch: alternating zoom steps about the view center.
    group.bench_function("zoom_about_view_point_x100", |b| {
        let mut vp = fitted();
        let center = vp.view_center();
        b.iter(|| {
            for i in 0..100 {
                let f = if i % 2 == 0 { 1.05 } else { 1.0 / 1.05 };
                vp.zoom_about_view_point(center, black_box(f));
            }
        });
    });

    group.bench_function("view_to_content_point", |b| {
        let mut vp = fitted();
        vp.zoom_by(2.5, Point::new(1000.0, 500.0));
        b.iter(|| black_box(vp.view_to_content_point(black_box(Point::new(640.0, 360.0)))));
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
