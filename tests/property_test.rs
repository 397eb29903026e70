//! Property-based tests for the signal operations
//!
//! These tests use proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use tonegate::{gate, generate, mix, sample_count, window, Signal};

fn signal(len: usize) -> impl Strategy<Value = Signal> {
    prop::collection::vec(-1.0f64..1.0, len).prop_map(Signal::from)
}

proptest! {
    /// Property: generated length always matches the grid
    #[test]
    fn generate_length_matches_grid(
        frequency in -2000.0f64..2000.0,
        duration in 0.0f64..2.0,
        rate in 1u32..8000,
    ) {
        let x = generate(frequency, duration, rate).unwrap();
        prop_assert_eq!(x.len(), sample_count(duration, rate).unwrap());
    }

    /// Property: sine never leaves [-1, 1]
    #[test]
    fn generate_stays_in_unit_range(
        frequency in -20000.0f64..20000.0,
        duration in 0.0f64..0.5,
        rate in 1u32..48000,
    ) {
        let x = generate(frequency, duration, rate).unwrap();
        prop_assert!(x.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    /// Property: zero duration is always empty
    #[test]
    fn zero_duration_is_empty(frequency in -1000.0f64..1000.0, rate in 1u32..96000) {
        prop_assert!(generate(frequency, 0.0, rate).unwrap().is_empty());
    }

    /// Property: negative durations are rejected
    #[test]
    fn negative_duration_rejected(duration in -100.0f64..-1e-9, rate in 1u32..96000) {
        prop_assert!(sample_count(duration, rate).is_err());
    }

    /// Property: windows hold only 0.0 and 1.0, and open exactly on [start, end)
    #[test]
    fn window_is_half_open(
        start in -0.5f64..1.5,
        end in -0.5f64..1.5,
        rate in 1u32..500,
    ) {
        let w = window(start, end, 1.0, rate).unwrap();
        for (n, &g) in w.iter().enumerate() {
            let t = n as f64 / f64::from(rate);
            let open = start <= t && t < end;
            prop_assert_eq!(g, if open { 1.0 } else { 0.0 });
        }
    }

    /// Property: equal bounds close the gate everywhere
    #[test]
    fn equal_bounds_close(x in -1.0f64..2.0, rate in 1u32..500) {
        let w = window(x, x, 1.0, rate).unwrap();
        prop_assert_eq!(w.open_count(), 0);
    }

    /// Property: a gate spanning the whole scene opens every sample
    #[test]
    fn full_span_window_is_all_ones(duration in 0.0f64..3.0, rate in 1u32..48000) {
        let w = window(0.0, duration, duration, rate).unwrap();
        prop_assert_eq!(w.open_count(), w.len());
    }

    /// Property: non-finite frequencies are rejected
    #[test]
    fn non_finite_frequency_rejected(
        frequency in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
        duration in 0.0f64..1.0,
        rate in 1u32..8000,
    ) {
        prop_assert!(generate(frequency, duration, rate).is_err());
    }

    /// Property: adjacent gates split the grid without overlap or gap
    #[test]
    fn adjacent_windows_partition(split in 0.0f64..1.0, rate in 1u32..500) {
        let left = window(0.0, split, 1.0, rate).unwrap();
        let right = window(split, 1.0, 1.0, rate).unwrap();
        for n in 0..left.len() {
            prop_assert_eq!(left[n] + right[n], 1.0);
        }
    }

    /// Property: the full window leaves any signal unchanged
    #[test]
    fn full_gate_is_identity(x in signal(100)) {
        prop_assert_eq!(gate(&x, 0.0, 1.0, 1.0, 100).unwrap(), x);
    }

    /// Property: mixing one signal returns it
    #[test]
    fn mix_single_is_identity(x in signal(64)) {
        prop_assert_eq!(mix([&x]).unwrap(), x);
    }

    /// Property: two-way mixing commutes exactly
    #[test]
    fn mix_commutes(a in signal(32), b in signal(32)) {
        prop_assert_eq!(mix([&a, &b]).unwrap(), mix([&b, &a]).unwrap());
    }

    /// Property: mixing groups associate up to rounding
    #[test]
    fn mix_associates(a in signal(32), b in signal(32), c in signal(32)) {
        let ab = mix([&a, &b]).unwrap();
        let bc = mix([&b, &c]).unwrap();
        let left = mix([&ab, &c]).unwrap();
        let right = mix([&a, &bc]).unwrap();
        for (l, r) in left.iter().zip(right.iter()) {
            prop_assert!((l - r).abs() < 1e-12);
        }
    }

    /// Property: mismatched lengths are always rejected
    #[test]
    fn mix_rejects_mismatch(a in signal(10), b in signal(11)) {
        prop_assert!(mix([&a, &b]).is_err());
    }
}
