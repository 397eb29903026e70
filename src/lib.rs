pub mod dsp;
pub mod error;
pub mod signal;

pub use dsp::{gate, generate, mix, sample_count, time_axis, window, SampleGrid};
pub use error::{Result, SignalError};
pub use signal::{Signal, Window};
