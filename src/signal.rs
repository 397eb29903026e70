//! Owned, immutable sample sequences.
//!
//! A [`Signal`] is the amplitude of a waveform at uniformly spaced instants of
//! a sample grid. Operations never modify a signal in place: gating and mixing
//! always hand back a fresh one.

use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Real-valued samples indexed `0..N`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    /// An empty signal (the output of any zero-duration grid).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }

    /// Largest absolute sample value, or 0.0 for an empty signal.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }

    /// Root mean square level, or 0.0 for an empty signal.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let energy: f64 = self.samples.iter().map(|&x| x * x).sum();
        (energy / self.samples.len() as f64).sqrt()
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl From<&[f64]> for Signal {
    fn from(samples: &[f64]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Signal {
    fn from(samples: [f64; N]) -> Self {
        Self {
            samples: samples.to_vec(),
        }
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Gate state per sample: exactly 1.0 where the gate is open, 0.0 elsewhere.
///
/// Only built by [`window()`](crate::window()), which is what keeps the 0/1 invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Window {
    gate: Signal,
}

impl Window {
    pub(crate) fn from_gate_states(states: impl IntoIterator<Item = bool>) -> Self {
        Self {
            gate: states
                .into_iter()
                .map(|open| if open { 1.0 } else { 0.0 })
                .collect(),
        }
    }

    /// Whether sample `n` lies inside the gate. Out-of-range indices are closed.
    pub fn is_open(&self, n: usize) -> bool {
        self.gate.get(n).is_some_and(|&g| g == 1.0)
    }

    /// Number of samples that pass through the gate.
    pub fn open_count(&self) -> usize {
        self.gate.iter().filter(|&&g| g == 1.0).count()
    }

    pub fn as_signal(&self) -> &Signal {
        &self.gate
    }
}

impl Deref for Window {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.gate
    }
}

impl AsRef<[f64]> for Window {
    fn as_ref(&self) -> &[f64] {
        &self.gate
    }
}

impl From<Window> for Signal {
    fn from(window: Window) -> Self {
        window.gate
    }
}
