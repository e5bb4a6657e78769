//! Leaf-chain filtering and chain-set summaries.

use crate::chain::Chain;

/// Retains only leaf chains, preserving their relative order.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, build_chains, filter_leaves_in_place};
///
/// // Ring 1 - 2 - 3 - 1 with leaf 0 hanging off complex node 1.
/// let cluster = AdjacencyCluster::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 1)])?;
/// let mut chains = build_chains(&cluster, None)?;
/// assert_eq!(chains.len(), 2);
///
/// filter_leaves_in_place(&mut chains);
/// assert_eq!(chains.len(), 1);
/// assert!(chains[0].is_leaf());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn filter_leaves_in_place(chains: &mut Vec<Chain>) {
    chains.retain(Chain::is_leaf);
}

/// Replaces the contents of `output` with the leaf chains of `chains`.
pub fn filter_leaves_into(chains: &[Chain], output: &mut Vec<Chain>) {
    output.clear();
    output.extend(chains.iter().filter(|chain| chain.is_leaf()).cloned());
}

/// Counts chains with a leaf endpoint.
#[must_use]
pub fn count_leaf_chains(chains: &[Chain]) -> usize {
    chains.iter().filter(|chain| chain.is_leaf()).count()
}

/// Counts closed loops.
#[must_use]
pub fn count_closed_loops(chains: &[Chain]) -> usize {
    chains.iter().filter(|chain| chain.is_closed_loop()).count()
}

/// Counts chains spanning exactly one edge.
#[must_use]
pub fn count_single_edge_chains(chains: &[Chain]) -> usize {
    chains
        .iter()
        .filter(|chain| chain.single_edge().is_some())
        .count()
}

/// Per-category totals for a chain set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ChainCounts {
    /// Number of chains.
    pub total: usize,
    /// Chains with a leaf endpoint.
    pub leaf: usize,
    /// Closed loops.
    pub closed_loops: usize,
    /// Chains spanning exactly one edge.
    pub single_edge: usize,
}

impl ChainCounts {
    /// Tallies `chains` in a single pass.
    #[must_use]
    pub fn of(chains: &[Chain]) -> Self {
        chains.iter().fold(Self::default(), |mut counts, chain| {
            counts.total += 1;
            counts.leaf += usize::from(chain.is_leaf());
            counts.closed_loops += usize::from(chain.is_closed_loop());
            counts.single_edge += usize::from(chain.single_edge().is_some());
            counts
        })
    }
}
