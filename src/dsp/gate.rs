//! Apply a rectangular gate to an existing signal.
//!
//! Gating is the element-wise product of the signal and the window for the
//! same interval and grid. The input is borrowed and never modified.

use tracing::trace;

use crate::{
    dsp::{grid::SampleGrid, window::window_on},
    Result, Signal,
};

/// Multiply `signal` by the window `[start_time, end_time)` on the grid of
/// `(duration, sample_rate)`.
///
/// The signal must have exactly as many samples as the grid; otherwise the
/// call fails with [`SignalError::ShapeMismatch`](crate::SignalError::ShapeMismatch)
/// rather than truncating or padding.
pub fn gate(
    signal: &[f64],
    start_time: f64,
    end_time: f64,
    duration: f64,
    sample_rate: u32,
) -> Result<Signal> {
    let grid = SampleGrid::new(duration, sample_rate)?;
    grid.check_len(signal.len())?;

    let window = window_on(&grid, start_time, end_time);
    trace!(open = window.open_count(), samples = grid.len(), "gating signal");

    Ok(signal
        .iter()
        .zip(window.iter())
        .map(|(&x, &w)| x * w)
        .collect())
}
