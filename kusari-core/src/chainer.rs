//! Configured chain decomposition runs.
//!
//! Provides the [`Chainer`] entry point, which ties seed walking, strategy
//! selection, breakpoints and leaf filtering together, and the [`ChainSet`]
//! it returns.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{debug, instrument};

use crate::{
    Result,
    builder::ExecutionStrategy,
    chain::Chain,
    chains::{finish_chains, seeds_or_error, walk_seeds},
    cluster::{Cluster, Link, validate_cluster},
    error::ChainError,
    filter::{ChainCounts, filter_leaves_in_place},
};

/// Runs chain decomposition with a fixed configuration.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, ChainerBuilder};
///
/// // Ring 1 - 2 - 3 - 1 with leaf 0 hanging off complex node 1.
/// let cluster = AdjacencyCluster::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 1)])?;
/// let chainer = ChainerBuilder::new().build()?;
/// let set = chainer.run(&cluster, None)?;
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.counts().closed_loops, 1);
/// assert_eq!(set.counts().leaf, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chainer {
    execution_strategy: ExecutionStrategy,
    parallel_threshold: NonZeroUsize,
    leaves_only: bool,
    validate_cluster: bool,
}

impl Chainer {
    pub(crate) fn new(
        execution_strategy: ExecutionStrategy,
        parallel_threshold: NonZeroUsize,
        leaves_only: bool,
        validate_cluster: bool,
    ) -> Self {
        Self {
            execution_strategy,
            parallel_threshold,
            leaves_only,
            validate_cluster,
        }
    }

    /// Returns the execution strategy used when walking seeds.
    #[must_use]
    #[rustfmt::skip]
    pub fn execution_strategy(&self) -> ExecutionStrategy { self.execution_strategy }

    /// Returns the seed count at which [`ExecutionStrategy::Auto`] goes parallel.
    #[must_use]
    #[rustfmt::skip]
    pub fn parallel_threshold(&self) -> NonZeroUsize { self.parallel_threshold }

    /// Returns whether non-leaf chains are discarded.
    #[must_use]
    #[rustfmt::skip]
    pub fn leaves_only(&self) -> bool { self.leaves_only }

    /// Returns whether clusters are validated before building.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_validation(&self) -> bool { self.validate_cluster }

    /// Builds the chains of `cluster`, splits them at `breakpoints` when
    /// given, and applies leaf filtering when configured.
    ///
    /// Leaf filtering may legitimately leave the set empty; that is not an
    /// error.
    ///
    /// # Errors
    /// Returns [`ChainError::InvalidCluster`] when validation is enabled and
    /// the cluster is malformed, plus every error of
    /// [`crate::build_chains`].
    #[instrument(
        name = "core.run",
        err,
        skip_all,
        fields(
            cluster = %cluster.name(),
            nodes = cluster.node_count(),
            strategy = ?self.execution_strategy,
            breakpoints = breakpoints.is_some(),
        ),
    )]
    pub fn run<C: Cluster + Sync + ?Sized>(
        &self,
        cluster: &C,
        breakpoints: Option<&[bool]>,
    ) -> Result<ChainSet> {
        if self.validate_cluster {
            validate_cluster(cluster).map_err(|error| ChainError::InvalidCluster {
                cluster: Arc::from(cluster.name()),
                error,
            })?;
        }

        let seeds = seeds_or_error(cluster)?;
        let walked = self.walk(cluster, &seeds)?;
        let mut chains = finish_chains(cluster, walked, breakpoints)?;

        if self.leaves_only {
            filter_leaves_in_place(&mut chains);
            debug!(chains = chains.len(), "kept leaf chains");
        }
        Ok(ChainSet::new(chains))
    }

    fn walk<C: Cluster + Sync + ?Sized>(&self, cluster: &C, seeds: &[Link]) -> Result<Vec<Chain>> {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => Ok(walk_seeds(cluster, seeds)),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => Ok(crate::chains::walk_seeds_parallel(cluster, seeds)),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(ChainError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto if seeds.len() >= self.parallel_threshold.get() => {
                Ok(crate::chains::walk_seeds_parallel(cluster, seeds))
            }
            ExecutionStrategy::Auto => Ok(walk_seeds(cluster, seeds)),
        }
    }
}

/// Chains produced by [`Chainer::run`] together with their summary counts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChainSet {
    chains: Vec<Chain>,
    counts: ChainCounts,
}

impl ChainSet {
    fn new(chains: Vec<Chain>) -> Self {
        let counts = ChainCounts::of(&chains);
        Self { chains, counts }
    }

    /// Returns the chains in seed order.
    #[must_use]
    #[rustfmt::skip]
    pub fn chains(&self) -> &[Chain] { &self.chains }

    /// Returns per-category totals.
    #[must_use]
    #[rustfmt::skip]
    pub const fn counts(&self) -> ChainCounts { self.counts }

    /// Returns the number of chains.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.chains.len() }

    /// Returns `true` when no chain survived.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.chains.is_empty() }

    /// Consumes the set, returning its chains.
    #[must_use]
    pub fn into_chains(self) -> Vec<Chain> {
        self.chains
    }
}
