//! Walks a single chain out of a cluster from a seed link.

use tracing::warn;

use crate::{
    chain::Chain,
    cluster::{Cluster, Link},
};

/// Walks from `seed` through binary nodes until a leaf, a complex node, or the
/// seed itself is reached.
///
/// `seed.node` is the chain's starting boundary and `seed.edge` the edge the
/// walk leaves it by. The node that stops an open walk is included as the last
/// link. When the walk returns to the seed the chain is a closed loop and its
/// seed edge is replaced by the closing edge.
///
/// Loop detection relies on binary nodes having two distinct neighbours: the
/// walk arrived from one of them, so the other is the only way forward. A
/// missing neighbour ends the walk early instead of failing.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, Link, build_chain};
///
/// // Ring 0 - 1 - 2 - 0.
/// let ring = AdjacencyCluster::from_edges(3, &[(0, 1), (1, 2), (2, 0)])?;
/// let chain = build_chain(&ring, Link::new(0, 0));
/// assert!(chain.is_closed_loop());
/// assert_eq!(chain.seed(), Link::new(0, 2));
/// assert_eq!(chain.links(), &[Link::new(1, 0), Link::new(2, 1)]);
/// # Ok::<(), kusari_core::ClusterError>(())
/// ```
pub fn build_chain<C: Cluster + ?Sized>(cluster: &C, seed: Link) -> Chain {
    let mut seed = seed;
    let mut links = Vec::new();
    let mut is_closed_loop = false;

    let Some(first) = cluster.other_node(seed) else {
        warn!(
            seed_node = seed.node,
            seed_edge = seed.edge,
            "seed edge has no far endpoint; emitting an empty chain"
        );
        return Chain::from_walk(cluster, seed, links, false);
    };
    links.push(Link::new(first, seed.edge));

    // A simple walk visits each node at most once, so more steps than nodes
    // means the binary-node invariant does not hold.
    let step_budget = cluster.node_count();
    let mut previous = seed.node;
    let mut current = first;

    while let Some(node) = cluster.node(current) {
        let &[a, b] = node.links else {
            break;
        };
        let next = if a.node == previous { b } else { a };

        if next.node == seed.node {
            seed.edge = next.edge;
            is_closed_loop = true;
            break;
        }
        if links.len() >= step_budget {
            warn!(
                seed_node = seed.node,
                steps = links.len(),
                "chain walk exceeded the node count; binary nodes do not have distinct neighbours"
            );
            break;
        }

        links.push(next);
        previous = current;
        current = next.node;
    }

    Chain::from_walk(cluster, seed, links, is_closed_loop)
}
