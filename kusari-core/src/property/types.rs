//! Fixture types shared by the chain property suites.

use test_strategy::Arbitrary;

use crate::cluster::AdjacencyCluster;

/// Topology family a generated cluster is drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum ClusterShape {
    /// Random recursive tree; every chain ends at a leaf or a branch point.
    #[weight(3)]
    Tree,
    /// A single cycle with no boundary nodes.
    #[weight(1)]
    Ring,
    /// Rectangular grid whose border corners are binary.
    #[weight(2)]
    Lattice,
    /// Random tree plus extra edges, producing loops through branch points.
    #[weight(3)]
    Sparse,
    /// Path spine with pendant leaves.
    #[weight(2)]
    Caterpillar,
}

/// A generated cluster together with its source edges and breakpoint flags.
#[derive(Clone, Debug)]
pub(super) struct ClusterFixture {
    pub(super) shape: ClusterShape,
    pub(super) node_count: usize,
    pub(super) edges: Vec<(usize, usize)>,
    pub(super) breakpoints: Vec<bool>,
}

impl ClusterFixture {
    pub(super) fn cluster(&self) -> AdjacencyCluster {
        AdjacencyCluster::from_edges(self.node_count, &self.edges)
            .expect("generated fixtures are simple graphs")
            .with_name(format!("{:?}", self.shape))
    }
}
