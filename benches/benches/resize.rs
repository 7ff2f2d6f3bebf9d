// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};

use corkboard_geometry::{Quad, ResizeDirection, resize};

fn bench_resize_directions(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/resize");

    // A rotated quad exercises the full localize/delocalize path; the
    // unrotated one measures the cheap trigonometry case.
    let base = Quad::from_rect(Rect::new(100.0, 200.0, 340.0, 380.0));
    let rot = Vec2::from_angle(0.6);
    let rotated = base.rotate_about(base.center(), rot.x, rot.y);
    let delta = Vec2::new(35.0, -12.0);

    for (label, quad) in [("axis_aligned", base), ("rotated", rotated)] {
        for lock in [false, true] {
            let name = if lock { "locked" } else { "free" };
            group.bench_with_input(
                BenchmarkId::new(name, label),
                &quad,
                |b, quad| {
                    b.iter(|| {
                        for direction in ResizeDirection::ALL {
                            black_box(resize(direction, black_box(quad), delta, lock));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_resize_directions);
criterion_main!(benches);
