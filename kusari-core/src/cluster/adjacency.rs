//! In-memory cluster built from an undirected edge list.

use crate::error::ClusterError;

use super::{Cluster, Link};

/// Adjacency-list [`Cluster`] whose edge ids are positions in the input list.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, Cluster, NodeKind};
///
/// // 0 - 1 - 2, with 3 hanging off 1.
/// let cluster = AdjacencyCluster::from_edges(4, &[(0, 1), (1, 2), (1, 3)])?;
/// assert_eq!(cluster.node_count(), 4);
/// assert_eq!(cluster.edge_count(), 3);
/// assert_eq!(cluster.node(1).map(|n| n.kind()), Some(NodeKind::Complex));
/// # Ok::<(), kusari_core::ClusterError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyCluster {
    name: String,
    links: Vec<Vec<Link>>,
    edges: Vec<(usize, usize)>,
    point_indices: Option<Vec<usize>>,
}

impl AdjacencyCluster {
    /// Builds a cluster of `node_count` nodes from undirected `edges`.
    ///
    /// Links are recorded in edge order on both endpoints.
    ///
    /// # Errors
    /// Returns [`ClusterError::NodeOutOfBounds`] when an endpoint is not below
    /// `node_count`, [`ClusterError::SelfLoop`] when an edge joins a node to
    /// itself, and [`ClusterError::DuplicateBinaryNeighbour`] when a degree-2
    /// node reaches the same neighbour through both of its edges.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, ClusterError> {
        let mut links = vec![Vec::new(); node_count];
        for (edge, &(start, end)) in edges.iter().enumerate() {
            for node in [start, end] {
                if node >= node_count {
                    return Err(ClusterError::NodeOutOfBounds { node, node_count });
                }
            }
            if start == end {
                return Err(ClusterError::SelfLoop { edge, node: start });
            }
            links[start].push(Link::new(end, edge));
            links[end].push(Link::new(start, edge));
        }

        for (node, adjacency) in links.iter().enumerate() {
            if let [first, second] = adjacency.as_slice()
                && first.node == second.node
            {
                return Err(ClusterError::DuplicateBinaryNeighbour {
                    node,
                    neighbour: first.node,
                });
            }
        }

        Ok(Self {
            name: "cluster".to_owned(),
            links,
            edges: edges.to_vec(),
            point_indices: None,
        })
    }

    /// Replaces the cluster name reported through [`Cluster::name`].
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Assigns an external point index to every node.
    ///
    /// # Errors
    /// Returns [`ClusterError::PointIndexLengthMismatch`] when `point_indices`
    /// does not hold exactly one entry per node.
    ///
    /// # Examples
    /// ```
    /// use kusari_core::{AdjacencyCluster, Cluster};
    ///
    /// let cluster = AdjacencyCluster::from_edges(2, &[(0, 1)])?
    ///     .with_point_indices(vec![10, 20])?;
    /// assert_eq!(cluster.point_index(1), Some(20));
    /// # Ok::<(), kusari_core::ClusterError>(())
    /// ```
    pub fn with_point_indices(mut self, point_indices: Vec<usize>) -> Result<Self, ClusterError> {
        if point_indices.len() != self.links.len() {
            return Err(ClusterError::PointIndexLengthMismatch {
                expected: self.links.len(),
                actual: point_indices.len(),
            });
        }
        self.point_indices = Some(point_indices);
        Ok(self)
    }

    /// Returns the endpoints of `edge` in input order.
    #[must_use]
    pub fn edge(&self, edge: usize) -> Option<(usize, usize)> {
        self.edges.get(edge).copied()
    }
}

impl Cluster for AdjacencyCluster {
    fn node_count(&self) -> usize {
        self.links.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn links(&self, node: usize) -> Option<&[Link]> {
        self.links.get(node).map(Vec::as_slice)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn point_index(&self, node: usize) -> Option<usize> {
        match &self.point_indices {
            Some(indices) => indices.get(node).copied(),
            None => (node < self.links.len()).then_some(node),
        }
    }

    fn other_node(&self, link: Link) -> Option<usize> {
        let (start, end) = self.edge(link.edge)?;
        if start == link.node {
            Some(end)
        } else if end == link.node {
            Some(start)
        } else {
            None
        }
    }
}
