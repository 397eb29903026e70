//! Benchmarks for window construction and gating.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonegate::dsp::{gate, oscillator, window};

use crate::{grid_label, GRIDS};

pub fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/window");

    for &(duration, rate) in GRIDS {
        let label = grid_label(duration, rate);
        let (start, end) = (duration * 0.25, duration * 0.75);

        group.bench_with_input(
            BenchmarkId::new("rectangular", &label),
            &(duration, rate),
            |b, &(duration, rate)| {
                b.iter(|| window::window(black_box(start), black_box(end), duration, rate))
            },
        );

        let Ok(signal) = oscillator::generate(440.0, duration, rate) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("gate", &label),
            &(duration, rate),
            |b, &(duration, rate)| {
                b.iter(|| gate::gate(black_box(&signal), black_box(start), black_box(end), duration, rate))
            },
        );
    }

    group.finish();
}
