//! The chain entity: a maximal walk through binary nodes plus derived metadata.

use crate::{
    cluster::{Cluster, Link},
    hash::{endpoint_hash, symmetric_combine},
};

/// Order in which [`Chain::nodes`] flattens a chain.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Seed first, then every walked node in order.
    #[default]
    Forward,
    /// The forward sequence reversed.
    Reverse,
}

/// A maximal walk between two boundary nodes, or a closed loop.
///
/// The seed node itself is never part of [`Chain::links`]; `links` holds every
/// node reached after it together with the edge used to reach it. For closed
/// loops the seed's edge is the edge that closes the loop back onto the seed,
/// so the edge originally leaving the seed is `links()[0].edge`.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, Direction, build_chains};
///
/// // 0 - 1 - 2 - 3
/// let cluster = AdjacencyCluster::from_edges(4, &[(0, 1), (1, 2), (2, 3)])?;
/// let chains = build_chains(&cluster, None)?;
/// assert_eq!(chains.len(), 1);
///
/// let chain = &chains[0];
/// assert!(chain.is_leaf());
/// assert!(!chain.is_closed_loop());
/// assert_eq!(chain.single_edge(), None);
/// assert_eq!(chain.nodes(Direction::Forward), vec![0, 1, 2, 3]);
/// assert_eq!(chain.nodes(Direction::Reverse), vec![3, 2, 1, 0]);
/// assert_eq!(chain.edges(), vec![0, 1, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chain {
    seed: Link,
    links: Vec<Link>,
    is_closed_loop: bool,
    is_leaf: bool,
    single_edge: Option<usize>,
    unique_hash: u64,
}

impl Chain {
    /// Assembles a chain from a finished walk and derives its metadata.
    ///
    /// `seed.edge` must be the closing edge when `is_closed_loop` is set.
    pub(crate) fn from_walk<C: Cluster + ?Sized>(
        cluster: &C,
        seed: Link,
        links: Vec<Link>,
        is_closed_loop: bool,
    ) -> Self {
        let ends_at_leaf = || {
            is_leaf_node(cluster, seed.node)
                || links.last().is_some_and(|last| is_leaf_node(cluster, last.node))
        };
        let is_leaf = !is_closed_loop && ends_at_leaf();

        let (single_edge, unique_hash) = match (links.as_slice(), is_closed_loop) {
            ([] | [_], _) => (Some(seed.edge), seed.edge as u64),
            ([first, ..], true) => (
                None,
                symmetric_combine(
                    endpoint_hash(seed.node, first.edge),
                    endpoint_hash(seed.node, seed.edge),
                ),
            ),
            ([.., last], false) => (
                None,
                symmetric_combine(
                    endpoint_hash(seed.node, seed.edge),
                    endpoint_hash(last.node, last.edge),
                ),
            ),
        };

        Self {
            seed,
            links,
            is_closed_loop,
            is_leaf,
            single_edge,
            unique_hash,
        }
    }

    /// Returns the boundary node the chain starts from and the edge stored
    /// with it.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Link { self.seed }

    /// Returns every node walked after the seed with the edge used to reach it.
    #[must_use]
    #[rustfmt::skip]
    pub fn links(&self) -> &[Link] { &self.links }

    /// Returns `true` when the walk returned to its seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_closed_loop(&self) -> bool { self.is_closed_loop }

    /// Returns `true` when either end of an open chain is a leaf node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_leaf(&self) -> bool { self.is_leaf }

    /// Returns the sole edge of a single-edge chain.
    #[must_use]
    #[rustfmt::skip]
    pub const fn single_edge(&self) -> Option<usize> { self.single_edge }

    /// Returns the deduplication key, identical from either end of the chain.
    #[must_use]
    #[rustfmt::skip]
    pub const fn unique_hash(&self) -> u64 { self.unique_hash }

    /// Returns the number of walked links.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.links.len() }

    /// Returns `true` when the walk never left the seed.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.links.is_empty() }

    /// Returns the seed node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start_node(&self) -> usize { self.seed.node }

    /// Returns the last walked node, or the seed when nothing was walked.
    #[must_use]
    pub fn end_node(&self) -> usize {
        self.links.last().map_or(self.seed.node, |last| last.node)
    }

    /// Flattens the chain into node indices: the seed then every walked node,
    /// optionally reversed. A closed loop does not repeat its seed.
    #[must_use]
    pub fn nodes(&self, direction: Direction) -> Vec<usize> {
        let mut nodes = Vec::with_capacity(self.links.len() + 1);
        nodes.push(self.seed.node);
        nodes.extend(self.links.iter().map(|link| link.node));
        if direction == Direction::Reverse {
            nodes.reverse();
        }
        nodes
    }

    /// Returns every edge covered by the chain in walk order, including the
    /// closing edge of a loop.
    #[must_use]
    pub fn edges(&self) -> Vec<usize> {
        if self.links.is_empty() {
            return vec![self.seed.edge];
        }
        let mut edges: Vec<usize> = self.links.iter().map(|link| link.edge).collect();
        if self.is_closed_loop {
            edges.push(self.seed.edge);
        }
        edges
    }
}

fn is_leaf_node<C: Cluster + ?Sized>(cluster: &C, node: usize) -> bool {
    cluster.node(node).is_some_and(|view| view.is_leaf())
}
