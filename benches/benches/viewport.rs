// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use corkboard_view2d::BoardViewport;

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d");

    group.bench_function("wheel_zoom_cycle", |b| {
        b.iter(|| {
            let mut viewport = BoardViewport::new();
            let cursor = Point::new(640.0, 360.0);
            for _ in 0..8 {
                viewport.wheel_zoom(cursor, 1.0);
            }
            for _ in 0..8 {
                viewport.wheel_zoom(cursor, -1.0);
            }
            black_box(viewport.scale());
        });
    });

    group.bench_function("world_view_conversion", |b| {
        let mut viewport = BoardViewport::new();
        viewport.wheel_zoom(Point::new(200.0, 150.0), -1.0);

        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..256 {
                let p = Point::new(i as f64 * 3.0, i as f64 * 2.0);
                let world = viewport.view_to_world_point(p);
                acc += viewport.world_to_view_point(world).x;
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
