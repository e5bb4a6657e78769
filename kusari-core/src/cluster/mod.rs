//! Read-only cluster abstractions consumed by chain building.
//!
//! A cluster is an undirected graph whose node roles are a pure function of
//! degree. Chain building only ever borrows a [`Cluster`]; it never mutates it.

mod adjacency;
mod validate;

pub use self::{adjacency::AdjacencyCluster, validate::validate_cluster};

/// One half of an undirected edge: the neighbour reached and the edge used.
///
/// # Examples
/// ```
/// use kusari_core::Link;
///
/// let link = Link::new(3, 7);
/// assert_eq!(link.node, 3);
/// assert_eq!(link.edge, 7);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Link {
    /// Node index on the far side of the edge.
    pub node: usize,
    /// Index of the connecting edge.
    pub edge: usize,
}

impl Link {
    /// Creates a link to `node` through `edge`.
    #[must_use]
    pub const fn new(node: usize, edge: usize) -> Self {
        Self { node, edge }
    }
}

/// Role of a node, derived from its degree alone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// No links.
    Empty,
    /// Exactly one link.
    Leaf,
    /// Exactly two links.
    Binary,
    /// Three or more links; a branch point.
    Complex,
}

impl NodeKind {
    /// Classifies a node by its degree.
    ///
    /// # Examples
    /// ```
    /// use kusari_core::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_degree(0), NodeKind::Empty);
    /// assert_eq!(NodeKind::from_degree(1), NodeKind::Leaf);
    /// assert_eq!(NodeKind::from_degree(2), NodeKind::Binary);
    /// assert_eq!(NodeKind::from_degree(5), NodeKind::Complex);
    /// ```
    #[must_use]
    pub const fn from_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Empty,
            1 => Self::Leaf,
            2 => Self::Binary,
            _ => Self::Complex,
        }
    }
}

/// Borrowed view over one node of a [`Cluster`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeView<'a> {
    /// Cluster-local node index.
    pub index: usize,
    /// External identity used to look up breakpoint flags.
    pub point_index: usize,
    /// Ordered adjacency of the node.
    pub links: &'a [Link],
}

impl NodeView<'_> {
    /// Number of incident links.
    #[must_use]
    #[rustfmt::skip]
    pub const fn degree(&self) -> usize { self.links.len() }

    /// Degree-derived role of the node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::from_degree(self.degree())
    }

    /// Returns `true` when the node has no links.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.links.is_empty() }

    /// Returns `true` when the node has exactly one link.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_leaf(&self) -> bool { self.links.len() == 1 }

    /// Returns `true` when the node has exactly two links.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_binary(&self) -> bool { self.links.len() == 2 }

    /// Returns `true` when the node has three or more links.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_complex(&self) -> bool { self.links.len() > 2 }
}

/// Read-only graph collaborator consumed by chain building.
///
/// Implementations must guarantee that a binary node's two links reach two
/// distinct neighbours, neither of which is the node itself. Chain walks rely
/// on this to detect loops without a visited set; [`validate_cluster`] checks
/// it explicitly.
///
/// # Examples
/// ```
/// use kusari_core::{Cluster, Link};
///
/// struct Pair([Vec<Link>; 2]);
///
/// impl Cluster for Pair {
///     fn node_count(&self) -> usize { 2 }
///     fn edge_count(&self) -> usize { 1 }
///     fn links(&self, node: usize) -> Option<&[Link]> {
///         self.0.get(node).map(Vec::as_slice)
///     }
/// }
///
/// let pair = Pair([vec![Link::new(1, 0)], vec![Link::new(0, 0)]]);
/// let node = pair.node(0).expect("node 0 exists");
/// assert!(node.is_leaf());
/// assert_eq!(pair.other_node(Link::new(0, 0)), Some(1));
/// assert_eq!(pair.name(), "cluster");
/// ```
pub trait Cluster {
    /// Returns the number of nodes in the cluster.
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the cluster. Used as a capacity hint.
    fn edge_count(&self) -> usize;

    /// Returns the ordered links of `node`, or `None` when it does not exist.
    fn links(&self, node: usize) -> Option<&[Link]>;

    /// Returns a human-readable name.
    fn name(&self) -> &str {
        "cluster"
    }

    /// Maps a cluster-local node index to its external point index.
    ///
    /// The default implementation is the identity for nodes that exist.
    fn point_index(&self, node: usize) -> Option<usize> {
        (node < self.node_count()).then_some(node)
    }

    /// Returns a view over `index`, or `None` when the node does not exist.
    fn node(&self, index: usize) -> Option<NodeView<'_>> {
        let links = self.links(index)?;
        let point_index = self.point_index(index)?;
        Some(NodeView {
            index,
            point_index,
            links,
        })
    }

    /// Returns the neighbour reached by following `link.edge` away from
    /// `link.node`.
    ///
    /// The default implementation scans the links of `link.node`.
    /// Implementations with direct edge storage can answer in constant time.
    fn other_node(&self, link: Link) -> Option<usize> {
        self.links(link.node)?
            .iter()
            .find(|candidate| candidate.edge == link.edge)
            .map(|candidate| candidate.node)
    }

    /// Returns whether the cluster contains no nodes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
