use tracing::trace;

use crate::{dsp::grid::SampleGrid, Result, Window};

/*
Rectangular Gate
================

A gate switches a signal fully on or fully off. The window that describes
it holds 1.0 for every sample whose instant falls in [start_time, end_time)
and 0.0 everywhere else.

Vocabulary
----------

  open          The gate passes the signal (window value 1.0).

  closed        The gate silences the signal (window value 0.0).

  half-open     The left edge is inclusive, the right edge exclusive:

                    open  ⇔  start_time ≤ t[n] < end_time


Boundaries
----------

duration = 1.0, sample_rate = 8, gate [0.25, 0.50):

    t:     0    .125  .25  .375  .50  .625  .75  .875
    w:     0     0     1    1     0    0     0    0
                       ↑          ↑
                 inclusive   exclusive

  - A sample exactly on start_time is open.
  - A sample exactly on end_time is closed.
  - start_time == end_time opens nothing, whatever the value.
  - end_time < start_time opens nothing.
  - [0, duration) opens every sample, since the grid never reaches duration.

Contiguous gates [a, b) and [b, c) split the grid cleanly: the sample at b
belongs to the second gate only, so their windows sum to the window of
[a, c) with no double count and no gap.
*/

/// Build the 0/1 window for the half-open interval `[start_time, end_time)`.
pub fn window(start_time: f64, end_time: f64, duration: f64, sample_rate: u32) -> Result<Window> {
    let grid = SampleGrid::new(duration, sample_rate)?;
    Ok(window_on(&grid, start_time, end_time))
}

/// Window over an already validated grid.
pub fn window_on(grid: &SampleGrid, start_time: f64, end_time: f64) -> Window {
    trace!(start_time, end_time, samples = grid.len(), "building window");
    Window::from_gate_states(grid.times().map(|t| start_time <= t && t < end_time))
}
