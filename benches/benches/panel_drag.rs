// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_panel_drag::{
    DragAxis, OpenSide, PanelDrag, PanelDragConfig, SwitchBoundary, TouchSample,
};

const SURFACE: Size = Size::new(320.0, 640.0);

fn drawer() -> PanelDrag {
    let config = PanelDragConfig::new(DragAxis::Horizontal, OpenSide::Right).with_switch_boundary(
        SwitchBoundary::new()
            .with_speed_threshold(0.5)
            .with_distance_threshold(30.0),
    );
    PanelDrag::new(config)
        .expect("valid config")
        .on_drag_end(|panel, end| panel.switch(end.switch))
}

fn moves(len: usize) -> Vec<TouchSample> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            TouchSample::new(Point::new(300.0 * t, 2.0 * t), SURFACE, i as u64 + 1)
        })
        .collect()
}

fn bench_touch_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_drag/touch_move");

    for len in [16usize, 128, 1_024] {
        let events = moves(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("on_axis", len), &events, |b, events| {
            b.iter_batched(
                || {
                    let mut drag = drawer();
                    drag.on_touch_start(&mut TouchSample::new(Point::ZERO, SURFACE, 0));
                    (drag, events.clone())
                },
                |(mut drag, mut events)| {
                    for event in &mut events {
                        black_box(drag.on_touch_move(event));
                    }
                    black_box(drag);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_gesture_cycle(c: &mut Criterion) {
    let events = moves(32);
    c.bench_function("panel_drag/gesture_cycle", |b| {
        let mut drag = drawer();
        b.iter(|| {
            drag.on_touch_start(&mut TouchSample::new(Point::ZERO, SURFACE, 0));
            for &event in &events {
                let mut event = event;
                black_box(drag.on_touch_move(&mut event));
            }
            black_box(drag.on_touch_end(&mut TouchSample::released(40)));
            drag.close();
        });
    });
}

criterion_group!(benches, bench_touch_move, bench_gesture_cycle);
criterion_main!(benches);
