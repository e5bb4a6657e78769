//! Benchmark support crate for kusari.
//!
//! Provides seeded synthetic clusters and parameter types used by Criterion
//! benchmarks for chain building and breakpoint splitting.

pub mod error;
pub mod params;
pub mod source;
