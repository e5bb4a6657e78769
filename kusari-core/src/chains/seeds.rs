//! Seed enumeration for chain building.

use crate::cluster::{Cluster, Link};

/// Enumerates the seed links of `cluster` in deterministic order.
///
/// Leaves come first in node order, each seeding from its only link. Complex
/// nodes follow, seeding one link per non-leaf neighbour; links to leaves are
/// skipped because the leaf already seeds that edge. When the cluster has
/// neither leaves nor complex nodes every populated node is binary, so the
/// first populated node seeds the single loop from its first link.
pub(crate) fn collect_seeds<C: Cluster + ?Sized>(cluster: &C) -> Vec<Link> {
    let node_count = cluster.node_count();
    let mut seeds = Vec::with_capacity(node_count);

    for index in 0..node_count {
        if let Some(node) = cluster.node(index)
            && let [only] = node.links
        {
            seeds.push(Link::new(index, only.edge));
        }
    }
    let leaf_seeds = seeds.len();

    let mut has_complex = false;
    for index in 0..node_count {
        let Some(node) = cluster.node(index) else {
            continue;
        };
        if !node.is_complex() {
            continue;
        }
        has_complex = true;
        let inner = node
            .links
            .iter()
            .filter(|link| !cluster.node(link.node).is_some_and(|n| n.is_leaf()))
            .map(|link| Link::new(index, link.edge));
        seeds.extend(inner);
    }

    if leaf_seeds == 0 && !has_complex {
        let first_link = (0..node_count).find_map(|index| {
            let node = cluster.node(index)?;
            node.links.first().map(|link| Link::new(index, link.edge))
        });
        seeds.extend(first_link);
    }

    seeds
}
