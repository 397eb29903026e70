use tracing::debug;

use crate::{Result, Signal, SignalError};

/*
Sample Grid
===========

Every signal in this crate lives on a grid of uniformly spaced instants.
The grid is fully determined by two numbers: how long (duration, seconds)
and how dense (sample_rate, samples per second).

Vocabulary
----------

  N             Number of samples on the grid:

                    N = round(duration × sample_rate)

                Rounding is half away from zero. Two signals built from the
                same (duration, sample_rate) always have the same N.

  t[n]          The instant of sample n:

                    t[n] = n / sample_rate        for n = 0 .. N-1

                Computed directly from n, never by accumulating a step, so
                t[n] is exact whenever n / sample_rate is representable.

  half-open     The axis covers [0, duration). The end instant is never a
                sample: with duration = 1.0 and sample_rate = 8 the last
                sample sits at 0.875, not 1.0.

    t:  0     0.125  0.25  0.375  0.5   0.625  0.75  0.875 | 1.0
        ●─────●──────●─────●──────●─────●──────●─────●─────○
        n=0                                          n=7    (excluded)
*/

/// The `(duration, sample_rate)` pair, validated once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    duration: f64,
    sample_rate: u32,
    len: usize,
}

impl SampleGrid {
    /// Validate the pair and compute `N`.
    ///
    /// Fails with [`SignalError::InvalidArgument`] when the rate is zero, when
    /// the duration is negative or non-finite, or when `N` would not fit in
    /// memory addressing.
    ///
    /// `N` is only bounded by `usize::MAX`. A grid that is addressable but too
    /// large to allocate (e.g. `1e12` s at 48 kHz) is accepted here, and
    /// generating samples on it aborts on allocation. Keeping grids to a
    /// sensible size is the caller's responsibility.
    pub fn new(duration: f64, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            debug!(duration, "rejecting zero sample rate");
            return Err(SignalError::invalid("sample rate must be positive"));
        }
        if !duration.is_finite() || duration < 0.0 {
            debug!(duration, sample_rate, "rejecting duration");
            return Err(SignalError::invalid(format!(
                "duration must be a finite, non-negative number of seconds (got {duration})"
            )));
        }

        let exact = (duration * f64::from(sample_rate)).round();
        if exact >= usize::MAX as f64 {
            debug!(duration, sample_rate, "rejecting oversized grid");
            return Err(SignalError::invalid(format!(
                "{duration} s at {sample_rate} Hz does not fit in a signal"
            )));
        }

        Ok(Self {
            duration,
            sample_rate,
            len: exact as usize,
        })
    }

    /// Number of samples `N`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Instant of sample `n`, in seconds.
    #[inline]
    pub fn time_at(&self, n: usize) -> f64 {
        n as f64 / f64::from(self.sample_rate)
    }

    /// Iterate over `t[0] .. t[N-1]`.
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(move |n| self.time_at(n))
    }

    /// The time axis as a signal, handy for plotting collaborators.
    pub fn time_axis(&self) -> Signal {
        self.times().collect()
    }

    /// Check that a signal of `len` samples belongs on this grid.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len != self.len {
            debug!(expected = self.len, actual = len, "signal does not match grid");
            return Err(SignalError::ShapeMismatch {
                expected: self.len,
                actual: len,
            });
        }
        Ok(())
    }
}

/// `N = round(duration × sample_rate)`, validated.
pub fn sample_count(duration: f64, sample_rate: u32) -> Result<usize> {
    SampleGrid::new(duration, sample_rate).map(|grid| grid.len())
}

/// `t[n] = n / sample_rate` for `n` in `[0, N)`.
pub fn time_axis(duration: f64, sample_rate: u32) -> Result<Signal> {
    SampleGrid::new(duration, sample_rate).map(|grid| grid.time_axis())
}
