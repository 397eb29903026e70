//! Signal mixing by superposition.

use tracing::{debug, trace};

use crate::{Result, Signal, SignalError};

/*
Mixing
======

Two tones sounding together are modeled by adding their samples:

    mix[n] = a[n] + b[n] + c[n] + ...

No weighting and no normalization. Summation is commutative and
associative, so the order of the inputs never changes the result (up to
floating-point rounding), and mixing a single signal returns it unchanged.


Headroom
--------

Summing does not keep the result in [-1, +1]. Two full-scale sines that
peak together reach 2.0:

    C4 gated:  [ 0.0,  0.9,  0.6, -0.3]
    F4 gated:  [ 0.0,  0.8,  0.9,  0.1]
    mix:       [ 0.0,  1.7,  1.5, -0.2]   ← exceeds 1.0

Renderers should scale their amplitude axis from the mixed signal's peak
rather than assume unit range.


Shape
-----

Every input must have the same length; the check runs over all inputs
before anything is summed. The accumulator starts as a copy of the first
input, never an alias, so no caller-visible signal is modified.
*/

/// Element-wise sum of one or more equal-length signals.
///
/// Fails with [`SignalError::InvalidArgument`] when no signals are given, and
/// with [`SignalError::ShapeMismatch`] at the first input whose length
/// differs from the first one.
pub fn mix<I, S>(signals: I) -> Result<Signal>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[f64]>,
{
    let signals: Vec<S> = signals.into_iter().collect();

    let Some((first, rest)) = signals.split_first() else {
        debug!("rejecting empty mix");
        return Err(SignalError::invalid("need at least one signal to mix"));
    };

    let expected = first.as_ref().len();
    if let Some(other) = rest.iter().find(|s| s.as_ref().len() != expected) {
        let actual = other.as_ref().len();
        debug!(expected, actual, "rejecting mix of unequal lengths");
        return Err(SignalError::ShapeMismatch { expected, actual });
    }

    let mut total = first.as_ref().to_vec();
    for s in rest {
        sum_in_place(&mut total, s.as_ref());
    }

    trace!(inputs = signals.len(), samples = expected, "mixed signals");
    Ok(total.into())
}

/// Add signal B into signal A in-place (summing).
///
/// ⚠️ WARNING: Can exceed [-1.0, +1.0] range!
#[inline]
pub fn sum_in_place(a: &mut [f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa += sb;
    }
}
