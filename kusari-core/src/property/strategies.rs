//! Strategy builders for chain property tests.
//!
//! Every generator yields a connected simple graph: no self loops and no
//! repeated node pairs, so binary nodes always reach two distinct neighbours.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{ClusterFixture, ClusterShape};

const MAX_TREE_NODES: usize = 48;
const MAX_RING_NODES: usize = 48;
const MAX_LATTICE_SIDE: usize = 7;
const MAX_SPINE: usize = 16;
const BREAKPOINT_PROBABILITY: f64 = 0.2;

/// Generates fixtures across every [`ClusterShape`].
pub(super) fn cluster_fixture_strategy() -> impl Strategy<Value = ClusterFixture> {
    (any::<ClusterShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates ring fixtures only.
pub(super) fn ring_fixture_strategy() -> impl Strategy<Value = ClusterFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(ClusterShape::Ring, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: ClusterShape, rng: &mut SmallRng) -> ClusterFixture {
    let (node_count, edges) = match shape {
        ClusterShape::Tree => {
            let node_count = rng.gen_range(2..=MAX_TREE_NODES);
            (node_count, random_tree(rng, node_count))
        }
        ClusterShape::Ring => {
            let node_count = rng.gen_range(3..=MAX_RING_NODES);
            let edges = (0..node_count)
                .map(|node| (node, (node + 1) % node_count))
                .collect();
            (node_count, edges)
        }
        ClusterShape::Lattice => lattice(
            rng.gen_range(2..=MAX_LATTICE_SIDE),
            rng.gen_range(2..=MAX_LATTICE_SIDE),
        ),
        ClusterShape::Sparse => sparse(rng),
        ClusterShape::Caterpillar => caterpillar(rng),
    };

    let breakpoints = (0..node_count)
        .map(|_| rng.gen_bool(BREAKPOINT_PROBABILITY))
        .collect();

    ClusterFixture {
        shape,
        node_count,
        edges,
        breakpoints,
    }
}

fn random_tree(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize)> {
    (1..node_count)
        .map(|node| (rng.gen_range(0..node), node))
        .collect()
}

fn lattice(width: usize, height: usize) -> (usize, Vec<(usize, usize)>) {
    let index = |x: usize, y: usize| y * width + x;
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((index(x, y), index(x + 1, y)));
            }
            if y + 1 < height {
                edges.push((index(x, y), index(x, y + 1)));
            }
        }
    }
    (width * height, edges)
}

fn sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(4..=MAX_TREE_NODES);
    let mut edges = random_tree(rng, node_count);
    let mut seen: HashSet<(usize, usize)> = edges
        .iter()
        .map(|&(a, b)| (a.min(b), a.max(b)))
        .collect();

    let extra = rng.gen_range(1..=node_count / 2);
    for _ in 0..extra {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a != b && seen.insert((a.min(b), a.max(b))) {
            edges.push((a, b));
        }
    }
    (node_count, edges)
}

fn caterpillar(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let spine = rng.gen_range(2..=MAX_SPINE);
    let mut edges: Vec<(usize, usize)> = (1..spine).map(|node| (node - 1, node)).collect();
    let mut node_count = spine;
    for anchor in 0..spine {
        for _ in 0..rng.gen_range(0..=2) {
            edges.push((anchor, node_count));
            node_count += 1;
        }
    }
    (node_count, edges)
}
