//! Shared test utilities for `kusari-core`.

use kusari_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{chain::Chain, cluster::AdjacencyCluster};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Path `0 - 1 - ... - (n - 1)`; edge `i` joins nodes `i` and `i + 1`.
pub(crate) fn path(node_count: usize) -> AdjacencyCluster {
    let edges: Vec<_> = (1..node_count).map(|node| (node - 1, node)).collect();
    AdjacencyCluster::from_edges(node_count, &edges).expect("path fixture must be valid")
}

/// Ring `0 - 1 - ... - (n - 1) - 0`; edge `i` joins `i` and `(i + 1) % n`.
pub(crate) fn ring(node_count: usize) -> AdjacencyCluster {
    let edges: Vec<_> = (0..node_count)
        .map(|node| (node, (node + 1) % node_count))
        .collect();
    AdjacencyCluster::from_edges(node_count, &edges).expect("ring fixture must be valid")
}

/// Star with centre `0` and leaves `1..=leaves`.
pub(crate) fn star(leaves: usize) -> AdjacencyCluster {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    AdjacencyCluster::from_edges(leaves + 1, &edges).expect("star fixture must be valid")
}

/// Triangle `0 - 1 - 2 - 0` with leaf `3` hanging off complex node `0`.
pub(crate) fn lollipop() -> AdjacencyCluster {
    AdjacencyCluster::from_edges(4, &[(0, 1), (1, 2), (2, 0), (0, 3)])
        .expect("lollipop fixture must be valid")
}

/// Flags exactly the listed point indices.
pub(crate) fn flags(len: usize, points: &[usize]) -> Vec<bool> {
    let mut flags = vec![false; len];
    for &point in points {
        flags[point] = true;
    }
    flags
}

/// Edge ids covered by `chains`, sorted.
pub(crate) fn covered_edges(chains: &[Chain]) -> Vec<usize> {
    let mut edges: Vec<usize> = chains.iter().flat_map(Chain::edges).collect();
    edges.sort_unstable();
    edges
}
