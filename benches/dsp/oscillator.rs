//! Benchmarks for sine generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonegate::dsp::oscillator;

use crate::{grid_label, GRIDS};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &(duration, rate) in GRIDS {
        group.bench_with_input(
            BenchmarkId::new("sine", grid_label(duration, rate)),
            &(duration, rate),
            |b, &(duration, rate)| {
                b.iter(|| oscillator::generate(black_box(440.0), black_box(duration), rate))
            },
        );
    }

    group.finish();
}
