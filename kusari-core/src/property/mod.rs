//! Property-based tests for chain decomposition.
//!
//! Generates connected simple clusters across several shapes and checks that
//! chains partition the edge set exactly once, before and after random
//! breakpoints, that chain keys are independent of walk direction, and that
//! pure cycles collapse to a single loop.

mod invariants;
mod strategies;
mod types;
