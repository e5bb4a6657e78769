//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use crate::source::SyntheticError;
use kusari_core::{ChainError, ClusterError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic cluster generation failed.
    #[error("synthetic cluster generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A generated edge list broke a cluster invariant.
    #[error("cluster construction failed: {0}")]
    Cluster(#[from] ClusterError),
    /// Chain building failed while preparing inputs.
    #[error("chain building failed: {0}")]
    Chain(#[from] ChainError),
}
