//! Counters emitted while building and splitting chains.
//!
//! Every recorder compiles to a no-op unless the `metrics` feature is enabled.

#[cfg(feature = "metrics")]
pub(crate) fn record_chains_built(count: usize) {
    metrics::counter!("chains_built").increment(count as u64);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_chains_built(_count: usize) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_duplicates_dropped(count: usize) {
    metrics::counter!("chain_duplicates_dropped").increment(count as u64);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_duplicates_dropped(_count: usize) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_segment_emitted() {
    metrics::counter!("chain_segments_emitted").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record_segment_emitted() {}

#[cfg(feature = "metrics")]
pub(crate) fn record_loop_merge() {
    metrics::counter!("chain_loop_merges").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record_loop_merge() {}
