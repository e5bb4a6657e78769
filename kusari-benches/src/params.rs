//! Benchmark parameter types used as Criterion benchmark ids.

use std::fmt;

/// Parameters for a chain-building benchmark run.
#[derive(Clone, Debug)]
pub struct ChainBenchParams {
    /// Short label of the synthetic shape.
    pub shape: &'static str,
    /// Number of nodes in the cluster.
    pub node_count: usize,
}

impl fmt::Display for ChainBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.shape, self.node_count)
    }
}

/// Parameters for a breakpoint-splitting benchmark run.
#[derive(Clone, Debug)]
pub struct BreakpointBenchParams {
    /// Number of nodes in the cluster.
    pub node_count: usize,
    /// Chance, in thousandths, that a node is flagged.
    pub density_permille: u32,
}

impl fmt::Display for BreakpointBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}/1000", self.node_count, self.density_permille)
    }
}
