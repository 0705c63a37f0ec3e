//! Benchmark support crate for flowgen.
//!
//! Holds the parameter types and topology builders shared by the Criterion
//! benchmarks, which time each strategy's generation and the text rendering
//! of its output.

pub mod error;
pub mod params;
