use std::f64::consts::TAU;

use tracing::{debug, trace};

use crate::{dsp::grid::SampleGrid, Result, Signal, SignalError};

/*
Sampled Sine
============

    x[n] = sin(2π · frequency · t[n]),   t[n] = n / sample_rate

Each sample is evaluated from its own instant rather than by advancing a
running phase, so the output is bit-identical for identical inputs and
carries no accumulated phase drift over long grids.

With frequency = 2 Hz and sample_rate = 8, four samples cover one cycle and
the output lands exactly on the quarter points of the sine:

    n:   0    1    2    3    4    5    6    7
    x:   0    1    0   -1    0    1    0   -1

Any finite frequency is accepted (zero gives silence, negative flips the
sign). NaN and infinite frequencies are rejected: they would turn every
sample into NaN.

Frequencies above sample_rate / 2 alias; that is a property of sampling,
not an error.
*/

/// Generate `sin(2π · frequency · t)` over the grid of `(duration, sample_rate)`.
///
/// The output has exactly [`sample_count`](crate::sample_count) samples, all in
/// `[-1, 1]`. A zero duration yields an empty signal. A non-finite frequency
/// fails with [`SignalError::InvalidArgument`].
pub fn generate(frequency: f64, duration: f64, sample_rate: u32) -> Result<Signal> {
    let grid = SampleGrid::new(duration, sample_rate)?;
    sine_on(&grid, frequency)
}

/// Sine over an already validated grid.
pub fn sine_on(grid: &SampleGrid, frequency: f64) -> Result<Signal> {
    if !frequency.is_finite() {
        debug!(frequency, "rejecting frequency");
        return Err(SignalError::invalid(format!(
            "frequency must be a finite number of Hz (got {frequency})"
        )));
    }

    trace!(frequency, samples = grid.len(), "generating sine");
    Ok(grid.times().map(|t| (TAU * frequency * t).sin()).collect())
}
