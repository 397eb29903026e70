//! Benchmarks for generate -> gate -> mix pipelines.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonegate::{gate, generate, mix, Result, Signal};

use crate::{grid_label, GRIDS};

/// Frequencies of a C major triad plus the F4 from the classic duet
const TONES: &[f64] = &[261.63, 329.63, 349.23, 392.0];

/// Render `voices` tones, each entering `stagger` seconds after the previous
fn render_duet(voices: usize, duration: f64, rate: u32) -> Result<Signal> {
    let stagger = duration / (voices as f64 * 2.0);
    let gated = TONES
        .iter()
        .take(voices)
        .enumerate()
        .map(|(k, &freq)| {
            let start = stagger * k as f64;
            let tone = generate(freq, duration, rate)?;
            gate(&tone, start, start + duration * 0.5, duration, rate)
        })
        .collect::<Result<Vec<_>>>()?;
    mix(&gated)
}

pub fn bench_duet(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/duet");

    for &(duration, rate) in GRIDS {
        let label = grid_label(duration, rate);

        // === CLASSIC: 2 tones, delayed entrance ===
        group.bench_with_input(BenchmarkId::new("two_voices", &label), &(duration, rate), |b, &(d, r)| {
            b.iter(|| render_duet(black_box(2), d, r))
        });

        // === DENSE: 4 staggered tones ===
        group.bench_with_input(BenchmarkId::new("four_voices", &label), &(duration, rate), |b, &(d, r)| {
            b.iter(|| render_duet(black_box(4), d, r))
        });
    }

    group.finish();
}
