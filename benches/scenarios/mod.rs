//! Real-world scenario benchmarks.
//!
//! These model the duet the binary renders: tones generated, gated with
//! staggered entrances, then mixed.

mod duet;

pub use duet::bench_duet;
