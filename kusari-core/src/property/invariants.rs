//! Property runners checked against every generated fixture.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    apply_breakpoints, build_chain, build_chains,
    chain::{Chain, Direction},
    cluster::{Cluster, Link},
};

use super::types::ClusterFixture;

fn chains_of(
    fixture: &ClusterFixture,
    breakpoints: Option<&[bool]>,
) -> Result<Vec<Chain>, TestCaseError> {
    let cluster = fixture.cluster();
    build_chains(&cluster, breakpoints).map_err(|error| {
        TestCaseError::fail(format!(
            "build_chains failed: {error} (shape={:?}, nodes={}, edges={})",
            fixture.shape,
            fixture.node_count,
            fixture.edges.len(),
        ))
    })
}

/// Checks that `chains` cover every edge of the fixture exactly once.
fn validate_exact_cover(
    fixture: &ClusterFixture,
    chains: &[Chain],
    stage: &str,
) -> TestCaseResult {
    let mut hits = vec![0_usize; fixture.edges.len()];
    for chain in chains {
        for edge in chain.edges() {
            let Some(slot) = hits.get_mut(edge) else {
                return Err(TestCaseError::fail(format!(
                    "{stage}: chain covers unknown edge {edge}"
                )));
            };
            *slot += 1;
        }
    }
    if let Some((edge, &count)) = hits.iter().enumerate().find(|(_, count)| **count != 1) {
        return Err(TestCaseError::fail(format!(
            "{stage}: edge {edge} covered {count} times (shape={:?}, chains={})",
            fixture.shape,
            chains.len(),
        )));
    }
    Ok(())
}

/// Chains partition the edge set, both as built and after splitting.
pub(super) fn run_edge_cover_property(fixture: &ClusterFixture) -> TestCaseResult {
    let chains = chains_of(fixture, None)?;
    validate_exact_cover(fixture, &chains, "unsplit")?;

    let split = chains_of(fixture, Some(&fixture.breakpoints))?;
    validate_exact_cover(fixture, &split, "split")
}

/// Unsplit open chains start and end at boundary nodes; loops never do.
pub(super) fn run_boundary_property(fixture: &ClusterFixture) -> TestCaseResult {
    let cluster = fixture.cluster();
    let chains = chains_of(fixture, None)?;
    let is_boundary = |node: usize| cluster.node(node).is_some_and(|view| !view.is_binary());

    for chain in &chains {
        if chain.is_empty() {
            return Err(TestCaseError::fail("chain set contains an empty chain"));
        }
        if chain.is_closed_loop() {
            if chain.is_leaf() {
                return Err(TestCaseError::fail("closed loop flagged as leaf"));
            }
            continue;
        }
        if !is_boundary(chain.start_node()) || !is_boundary(chain.end_node()) {
            return Err(TestCaseError::fail(format!(
                "open chain {:?} does not end at boundary nodes",
                chain.nodes(Direction::Forward)
            )));
        }
    }
    Ok(())
}

/// Walking a chain from its far end reaches the same key and reversed nodes.
pub(super) fn run_reverse_hash_property(fixture: &ClusterFixture) -> TestCaseResult {
    let cluster = fixture.cluster();
    for chain in chains_of(fixture, None)? {
        let Some(last) = chain.links().last() else {
            continue;
        };
        let reverse_seed = if chain.is_closed_loop() {
            chain.seed()
        } else {
            Link::new(last.node, last.edge)
        };
        let reversed = build_chain(&cluster, reverse_seed);
        if reversed.unique_hash() != chain.unique_hash() {
            return Err(TestCaseError::fail(format!(
                "reverse walk of {:?} changed the chain key",
                chain.nodes(Direction::Forward)
            )));
        }
        if !chain.is_closed_loop()
            && reversed.nodes(Direction::Reverse) != chain.nodes(Direction::Forward)
        {
            return Err(TestCaseError::fail("reverse walk visited different nodes"));
        }
    }
    Ok(())
}

/// Empty or all-false flags leave the chain set untouched.
pub(super) fn run_breakpoint_identity_property(fixture: &ClusterFixture) -> TestCaseResult {
    let cluster = fixture.cluster();
    let chains = chains_of(fixture, None)?;
    if apply_breakpoints(&chains, &cluster, &[]) != chains {
        return Err(TestCaseError::fail("empty flags changed the chain set"));
    }
    let unflagged = vec![false; fixture.node_count];
    if apply_breakpoints(&chains, &cluster, &unflagged) != chains {
        return Err(TestCaseError::fail("all-false flags changed the chain set"));
    }
    Ok(())
}

/// A pure cycle of `n` nodes yields one closed loop with `n - 1` links.
pub(super) fn run_pure_cycle_property(fixture: &ClusterFixture) -> TestCaseResult {
    let chains = chains_of(fixture, None)?;
    match chains.as_slice() {
        [chain] if chain.is_closed_loop() && chain.len() == fixture.node_count - 1 => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "ring of {} nodes produced {} chains",
            fixture.node_count,
            other.len()
        ))),
    }
}
