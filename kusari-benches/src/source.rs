//! Seeded synthetic clusters for benchmarking.
//!
//! Lattices thin out a rectangular grid, leaving a mix of leaves, binary
//! runs and complex junctions. Rings join a single cycle with random chords,
//! so most nodes are binary and every chord adds two complex nodes.

use kusari_core::{AdjacencyCluster, ClusterError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic cluster generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// A lattice needs at least two columns and two rows.
    #[error("lattice must be at least 2x2 (got {width}x{height})")]
    LatticeTooSmall {
        /// Requested column count.
        width: usize,
        /// Requested row count.
        height: usize,
    },
    /// A ring needs at least three nodes.
    #[error("ring must have at least 3 nodes (got {node_count})")]
    RingTooSmall {
        /// Requested node count.
        node_count: usize,
    },
    /// A probability above one thousand thousandths was requested.
    #[error("probability must be at most 1000 permille (got {permille})")]
    InvalidPermille {
        /// The out-of-range value.
        permille: u32,
    },
    /// The generated edges violated a cluster invariant.
    #[error("generated cluster is invalid: {0}")]
    Cluster(#[from] ClusterError),
}

/// Shape of a synthetic cluster.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntheticShape {
    /// A `width` by `height` grid keeping each edge with `keep_permille`
    /// chance.
    Lattice {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
        /// Chance, in thousandths, that a grid edge is kept.
        keep_permille: u32,
    },
    /// A cycle of `node_count` nodes with `chords` random chords.
    Ring {
        /// Number of nodes on the cycle.
        node_count: usize,
        /// Number of chords added across the cycle.
        chords: usize,
    },
}

/// Configuration for synthetic cluster generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Shape to generate.
    pub shape: SyntheticShape,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a cluster from `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the shape parameters are out of range.
///
/// # Examples
/// ```
/// use kusari_benches::source::{SyntheticConfig, SyntheticShape, generate_cluster};
/// use kusari_core::Cluster;
///
/// let config = SyntheticConfig {
///     shape: SyntheticShape::Ring { node_count: 32, chords: 2 },
///     seed: 7,
/// };
/// let cluster = generate_cluster(&config)?;
/// assert_eq!(cluster.node_count(), 32);
/// assert_eq!(cluster.edge_count(), 34);
/// # Ok::<(), kusari_benches::source::SyntheticError>(())
/// ```
pub fn generate_cluster(config: &SyntheticConfig) -> Result<AdjacencyCluster, SyntheticError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    match config.shape {
        SyntheticShape::Lattice {
            width,
            height,
            keep_permille,
        } => lattice(width, height, keep_permille, &mut rng),
        SyntheticShape::Ring { node_count, chords } => ring(node_count, chords, &mut rng),
    }
}

/// Flags each of `len` points with `permille` chance.
///
/// # Errors
/// Returns [`SyntheticError::InvalidPermille`] when `permille` exceeds 1000.
pub fn random_breakpoints(
    len: usize,
    permille: u32,
    seed: u64,
) -> Result<Vec<bool>, SyntheticError> {
    check_permille(permille)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..len).map(|_| rng.gen_ratio(permille, 1000)).collect())
}

const fn check_permille(permille: u32) -> Result<(), SyntheticError> {
    if permille > 1000 {
        return Err(SyntheticError::InvalidPermille { permille });
    }
    Ok(())
}

fn lattice(
    width: usize,
    height: usize,
    keep_permille: u32,
    rng: &mut SmallRng,
) -> Result<AdjacencyCluster, SyntheticError> {
    if width < 2 || height < 2 {
        return Err(SyntheticError::LatticeTooSmall { width, height });
    }
    check_permille(keep_permille)?;

    let mut edges = Vec::with_capacity(width.saturating_mul(height).saturating_mul(2));
    for row in 0..height {
        for column in 0..width {
            let node = row * width + column;
            if column + 1 < width && rng.gen_ratio(keep_permille, 1000) {
                edges.push((node, node + 1));
            }
            if row + 1 < height && rng.gen_ratio(keep_permille, 1000) {
                edges.push((node, node + width));
            }
        }
    }
    Ok(AdjacencyCluster::from_edges(width * height, &edges)?.with_name("lattice"))
}

fn ring(
    node_count: usize,
    chords: usize,
    rng: &mut SmallRng,
) -> Result<AdjacencyCluster, SyntheticError> {
    if node_count < 3 {
        return Err(SyntheticError::RingTooSmall { node_count });
    }

    let mut edges: Vec<_> = (0..node_count)
        .map(|node| (node, (node + 1) % node_count))
        .collect();
    while edges.len() < node_count + chords {
        let start = rng.gen_range(0..node_count);
        let end = rng.gen_range(0..node_count);
        if start != end {
            edges.push((start, end));
        }
    }
    Ok(AdjacencyCluster::from_edges(node_count, &edges)?.with_name("ring"))
}
