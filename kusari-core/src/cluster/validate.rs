//! Structural validation for arbitrary [`Cluster`] implementations.

use crate::error::ClusterError;

use super::Cluster;

/// Checks the preconditions chain building relies on.
///
/// Every link must name an in-range neighbour other than its owner, every
/// link must be reciprocated by the neighbour through the same edge, every
/// node must report a point index, and binary nodes must reach two distinct
/// neighbours.
///
/// Chain walks trust these properties rather than tracking visited nodes, so
/// callers feeding externally produced clusters should run this once first.
///
/// # Errors
/// Returns the first [`ClusterError`] found, scanning nodes in index order.
///
/// # Examples
/// ```
/// use kusari_core::{AdjacencyCluster, validate_cluster};
///
/// let ring = AdjacencyCluster::from_edges(3, &[(0, 1), (1, 2), (2, 0)])?;
/// validate_cluster(&ring)?;
/// # Ok::<(), kusari_core::ClusterError>(())
/// ```
pub fn validate_cluster<C: Cluster + ?Sized>(cluster: &C) -> Result<(), ClusterError> {
    let node_count = cluster.node_count();
    for node in 0..node_count {
        if cluster.point_index(node).is_none() {
            return Err(ClusterError::MissingPointIndex { node });
        }
        let links = cluster.links(node).unwrap_or_default();
        for link in links {
            if link.node >= node_count {
                return Err(ClusterError::NodeOutOfBounds {
                    node: link.node,
                    node_count,
                });
            }
            if link.node == node {
                return Err(ClusterError::SelfLoop {
                    edge: link.edge,
                    node,
                });
            }
            let reciprocated = cluster
                .links(link.node)
                .unwrap_or_default()
                .iter()
                .any(|back| back.node == node && back.edge == link.edge);
            if !reciprocated {
                return Err(ClusterError::AsymmetricLink {
                    node,
                    neighbour: link.node,
                    edge: link.edge,
                });
            }
        }
        if let [first, second] = links
            && first.node == second.node
        {
            return Err(ClusterError::DuplicateBinaryNeighbour {
                node,
                neighbour: first.node,
            });
        }
    }
    Ok(())
}
