//! Shared fixtures for `kusari-core` integration tests.

use kusari_core::{AdjacencyCluster, Cluster, Link};

/// Named node indices for the six-node ring `A-B-C-D-E-F-A`.
pub const A: usize = 0;
pub const B: usize = 1;
pub const C: usize = 2;
pub const D: usize = 3;
pub const E: usize = 4;
pub const F: usize = 5;

/// Builds a named cluster from `edges`.
pub fn cluster(name: &str, node_count: usize, edges: &[(usize, usize)]) -> AdjacencyCluster {
    AdjacencyCluster::from_edges(node_count, edges)
        .expect("fixture edges must be valid")
        .with_name(name)
}

/// The ring `A-B-C-D-E-F-A`; edge `i` leaves node `i` clockwise.
pub fn six_cycle() -> AdjacencyCluster {
    cluster("hexagon", 6, &[(A, B), (B, C), (C, D), (D, E), (E, F), (F, A)])
}

/// Flags exactly the listed nodes.
pub fn flags(len: usize, nodes: &[usize]) -> Vec<bool> {
    (0..len).map(|node| nodes.contains(&node)).collect()
}

/// Cluster backed by hand-written adjacency lists, relying on every default
/// [`Cluster`] method.
pub struct ListCluster {
    pub links: Vec<Vec<Link>>,
}

impl ListCluster {
    /// Builds adjacency lists from `edges` in edge order.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut links = vec![Vec::new(); node_count];
        for (edge, &(a, b)) in edges.iter().enumerate() {
            links[a].push(Link::new(b, edge));
            links[b].push(Link::new(a, edge));
        }
        Self { links }
    }
}

impl Cluster for ListCluster {
    fn node_count(&self) -> usize {
        self.links.len()
    }

    fn edge_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn links(&self, node: usize) -> Option<&[Link]> {
        self.links.get(node).map(Vec::as_slice)
    }
}
