//! Benchmarks for single signal operations.

mod mix;
mod oscillator;
mod window;

pub use mix::bench_mix;
pub use oscillator::bench_oscillator;
pub use window::bench_window;
