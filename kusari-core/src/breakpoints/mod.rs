//! Re-segmentation of chains at externally flagged breakpoint nodes.
//!
//! Flags are indexed by point index, resolved per node through
//! [`Cluster::point_index`]; lookups outside the flag slice read `false`.
//!
//! Closed loops are unrolled by appending the closing link so the scan sees
//! the wrap-around edge. A loop seeded at a binary node was cut at an
//! arbitrary position, so once the scan finishes the trailing segment is
//! merged with the first segment emitted for that loop.

use std::mem;

use tracing::{debug, instrument};

use crate::{
    chain::Chain,
    chains::dedup_chains,
    cluster::{Cluster, Link},
    telemetry,
};

/// Splits every chain at nodes whose point index is flagged in `flags`.
///
/// Single-edge chains pass through untouched, as do closed loops that contain
/// no breakpoint. Each emitted segment runs up to and including a breakpoint
/// and the next segment starts from it. The result is deduplicated by hash,
/// dropping segments that walked no links.
///
/// An empty `flags` slice returns the input unchanged.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, apply_breakpoints, build_chains};
///
/// // 0 - 1 - 2 - 3 - 4 split at node 2.
/// let cluster = AdjacencyCluster::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)])?;
/// let chains = build_chains(&cluster, None)?;
/// let flags = [false, false, true];
/// let split = apply_breakpoints(&chains, &cluster, &flags);
/// assert_eq!(split.len(), 2);
/// assert_eq!(split[0].end_node(), 2);
/// assert_eq!(split[1].start_node(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.apply_breakpoints",
    skip_all,
    fields(cluster = %cluster.name(), chains = chains.len(), flags = flags.len()),
)]
pub fn apply_breakpoints<C: Cluster + ?Sized>(
    chains: &[Chain],
    cluster: &C,
    flags: &[bool],
) -> Vec<Chain> {
    if flags.is_empty() {
        return chains.to_vec();
    }

    let splitter = Splitter { cluster, flags };
    let mut output = Vec::with_capacity(chains.len());
    for chain in chains {
        splitter.split(chain, &mut output);
    }

    let segments = output.len();
    let result = dedup_chains(output);
    debug!(segments, chains = result.len(), "applied breakpoints");
    result
}

struct Splitter<'a, C: ?Sized> {
    cluster: &'a C,
    flags: &'a [bool],
}

impl<C: Cluster + ?Sized> Splitter<'_, C> {
    fn is_breakpoint(&self, node: usize) -> bool {
        self.cluster
            .point_index(node)
            .and_then(|point| self.flags.get(point).copied())
            .unwrap_or(false)
    }

    /// A loop seeded at a binary node was opened at an arbitrary position
    /// rather than at a boundary.
    fn is_arbitrary_cut(&self, node: usize) -> bool {
        !self.is_breakpoint(node) && self.cluster.node(node).is_some_and(|view| view.is_binary())
    }

    fn split(&self, chain: &Chain, output: &mut Vec<Chain>) {
        if chain.single_edge().is_some() {
            output.push(chain.clone());
            return;
        }

        let closed = chain.is_closed_loop();
        let seed = chain.seed();
        let mut walk = chain.links().to_vec();
        let mut segment_seed = seed;
        if closed {
            walk.push(seed);
            segment_seed.edge = walk.first().map_or(seed.edge, |link| link.edge);
        }

        let mut segment = Vec::with_capacity(walk.len());
        let mut first_emitted = None;
        for (position, link) in walk.iter().enumerate() {
            segment.push(*link);
            if !self.is_breakpoint(link.node) {
                continue;
            }
            let links = mem::take(&mut segment);
            output.push(Chain::from_walk(self.cluster, segment_seed, links, false));
            telemetry::record_segment_emitted();
            first_emitted.get_or_insert(output.len() - 1);

            let next_edge = walk.get(position + 1).map_or(link.edge, |next| next.edge);
            segment_seed = Link::new(link.node, next_edge);
        }

        match first_emitted {
            None => output.push(chain.clone()),
            Some(first) if closed && self.is_arbitrary_cut(seed.node) => {
                if let Some(head) = output.get_mut(first) {
                    segment.extend_from_slice(head.links());
                    *head = Chain::from_walk(self.cluster, segment_seed, segment, false);
                    telemetry::record_loop_merge();
                }
            }
            Some(_) if !segment.is_empty() => {
                output.push(Chain::from_walk(self.cluster, segment_seed, segment, false));
                telemetry::record_segment_emitted();
            }
            Some(_) => {}
        }
    }
}
