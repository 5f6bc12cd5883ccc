//! Benchmark support crate for topsis.
//!
//! Provides seeded synthetic decision tables and parameter types used by the
//! Criterion benchmarks of the ranking pipeline.

pub mod params;
pub mod source;
