//! Kusari core library.
//!
//! Decomposes degree-bounded graph clusters into chains: maximal walks through
//! degree-2 nodes that end at leaves, at branch points, or back at their own
//! start. Chains are built once per physical walk, can be re-segmented at
//! externally flagged breakpoint nodes, and can be filtered down to those
//! touching a leaf.
//!
//! With the `metrics` feature enabled the crate emits the counters
//! `chains_built`, `chain_duplicates_dropped`, `chain_segments_emitted` and
//! `chain_loop_merges` through the `metrics` facade.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod breakpoints;
mod builder;
mod chain;
mod chainer;
mod chains;
mod cluster;
mod error;
mod filter;
mod hash;
mod telemetry;
mod walk;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    breakpoints::apply_breakpoints,
    builder::{ChainerBuilder, DEFAULT_PARALLEL_THRESHOLD, ExecutionStrategy},
    chain::{Chain, Direction},
    chainer::{ChainSet, Chainer},
    chains::build_chains,
    cluster::{AdjacencyCluster, Cluster, Link, NodeKind, NodeView, validate_cluster},
    error::{ChainError, ChainErrorCode, ClusterError, ClusterErrorCode, Result},
    filter::{
        ChainCounts, count_closed_loops, count_leaf_chains, count_single_edge_chains,
        filter_leaves_in_place, filter_leaves_into,
    },
    walk::build_chain,
};
