//! Chain set construction: seed enumeration, per-seed walks, deduplication.
//!
//! Seeds are collected in a fixed order (leaves, then complex-node links in
//! node order, then the loop fallback) so the stable deduplication pass keeps
//! the same representative of each chain no matter how the walks were run.

mod seeds;

use std::{collections::HashSet, sync::Arc};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use crate::{
    Result,
    breakpoints::apply_breakpoints,
    chain::Chain,
    cluster::{Cluster, Link},
    error::ChainError,
    telemetry,
    walk::build_chain,
};

pub(crate) use self::seeds::collect_seeds;

/// Builds every chain of `cluster`, optionally re-segmented at breakpoints.
///
/// Leaves seed one chain each, complex nodes seed one chain per link to a
/// non-leaf neighbour, and a cluster made only of binary nodes seeds a single
/// loop. Chains reached from both of their ends are kept once, in seed order.
/// When `breakpoints` is present and non-empty the deduplicated set is handed
/// to [`apply_breakpoints`].
///
/// # Errors
/// Returns [`ChainError::EmptyCluster`] when the cluster has no nodes,
/// [`ChainError::NoSeeds`] when no node can seed a chain, and
/// [`ChainError::NoChains`] when nothing survives deduplication or splitting.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, build_chains};
///
/// // Star: centre 0 with leaves 1, 2, 3.
/// let star = AdjacencyCluster::from_edges(4, &[(0, 1), (0, 2), (0, 3)])?;
/// let chains = build_chains(&star, None)?;
/// assert_eq!(chains.len(), 3);
/// assert!(chains.iter().all(|chain| chain.single_edge().is_some()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.build_chains",
    err,
    skip_all,
    fields(cluster = %cluster.name(), nodes = cluster.node_count()),
)]
pub fn build_chains<C: Cluster + ?Sized>(
    cluster: &C,
    breakpoints: Option<&[bool]>,
) -> Result<Vec<Chain>> {
    let seeds = seeds_or_error(cluster)?;
    let chains = walk_seeds(cluster, &seeds);
    finish_chains(cluster, chains, breakpoints)
}

/// Collects seeds, failing when the cluster cannot produce any.
pub(crate) fn seeds_or_error<C: Cluster + ?Sized>(cluster: &C) -> Result<Vec<Link>> {
    if cluster.is_empty() {
        return Err(ChainError::EmptyCluster {
            cluster: Arc::from(cluster.name()),
        });
    }
    let seeds = collect_seeds(cluster);
    debug!(seeds = seeds.len(), "collected chain seeds");
    if seeds.is_empty() {
        return Err(ChainError::NoSeeds {
            cluster: Arc::from(cluster.name()),
        });
    }
    Ok(seeds)
}

/// Walks every seed in order on the calling thread.
pub(crate) fn walk_seeds<C: Cluster + ?Sized>(cluster: &C, seeds: &[Link]) -> Vec<Chain> {
    seeds.iter().map(|&seed| build_chain(cluster, seed)).collect()
}

/// Walks every seed on the rayon pool, returning chains in seed order.
#[cfg(feature = "parallel")]
pub(crate) fn walk_seeds_parallel<C: Cluster + Sync + ?Sized>(
    cluster: &C,
    seeds: &[Link],
) -> Vec<Chain> {
    seeds
        .par_iter()
        .map(|&seed| build_chain(cluster, seed))
        .collect()
}

/// Deduplicates walked chains and applies breakpoints when requested.
pub(crate) fn finish_chains<C: Cluster + ?Sized>(
    cluster: &C,
    walked: Vec<Chain>,
    breakpoints: Option<&[bool]>,
) -> Result<Vec<Chain>> {
    telemetry::record_chains_built(walked.len());
    let empty = walked.iter().filter(|chain| chain.is_empty()).count();
    if empty > 0 {
        warn!(
            empty,
            "dropping chains whose seed edge has no far endpoint; the cluster is malformed"
        );
    }

    let mut chains = dedup_chains(walked);
    debug!(chains = chains.len(), "deduplicated chains");

    if let Some(flags) = breakpoints.filter(|flags| !flags.is_empty()) {
        chains = apply_breakpoints(&chains, cluster, flags);
    }

    if chains.is_empty() {
        return Err(ChainError::NoChains {
            cluster: Arc::from(cluster.name()),
        });
    }
    Ok(chains)
}

/// Keeps the first chain for each hash in input order and drops chains that
/// walked no links.
pub(crate) fn dedup_chains(chains: Vec<Chain>) -> Vec<Chain> {
    let before = chains.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<Chain> = chains
        .into_iter()
        .filter(|chain| !chain.is_empty() && seen.insert(chain.unique_hash()))
        .collect();
    telemetry::record_duplicates_dropped(before - kept.len());
    kept
}
