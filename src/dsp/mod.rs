//! Signal-processing primitives over finite sample grids.
//!
//! Every function here is pure: inputs are borrowed, outputs are freshly
//! allocated, and validation happens before any sample is produced. Callers
//! describe the grid implicitly by passing `(duration, sample_rate)`.

/// Rectangular gating of a signal by a time interval.
pub mod gate;
/// Sample count and time axis for a `(duration, sample_rate)` pair.
pub mod grid;
/// Element-wise summation of equal-length signals.
pub mod mix;
/// Sampled sinusoid generation.
pub mod oscillator;
/// Half-open 0/1 gate windows.
pub mod window;

pub use gate::gate;
pub use grid::{sample_count, time_axis, SampleGrid};
pub use mix::mix;
pub use oscillator::generate;
pub use window::window;
