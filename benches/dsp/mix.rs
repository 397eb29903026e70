//! Benchmarks for signal mixing operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonegate::{dsp::mix, Signal};

use crate::{grid_label, GRIDS};

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &(duration, rate) in GRIDS {
        let label = grid_label(duration, rate);
        let size = (duration * f64::from(rate)).round() as usize;

        // Generate test signals
        let signals: Vec<Signal> = (0..4)
            .map(|k| {
                (0..size)
                    .map(|i| (i as f64 * 0.1 * (k + 1) as f64).sin())
                    .collect()
            })
            .collect();

        // Two inputs
        group.bench_with_input(BenchmarkId::new("mix_2", &label), &size, |b, _| {
            b.iter(|| mix::mix(black_box(&signals[..2])))
        });

        // Four inputs
        group.bench_with_input(BenchmarkId::new("mix_4", &label), &size, |b, _| {
            b.iter(|| mix::mix(black_box(&signals)))
        });

        // Raw accumulator
        let mut acc = signals[0].to_vec();
        group.bench_with_input(BenchmarkId::new("sum_in_place", &label), &size, |b, _| {
            b.iter(|| {
                acc.copy_from_slice(&signals[0]);
                mix::sum_in_place(black_box(&mut acc), black_box(&signals[1]));
            })
        });
    }

    group.finish();
}
