//! Builder utilities for configuring chain decomposition.
//!
//! Exposes the execution strategy selection surface and builder validation
//! used before constructing [`Chainer`] instances.

use std::num::NonZeroUsize;

use crate::{Result, chainer::Chainer, error::ChainError};

/// Default number of seeds at which [`ExecutionStrategy::Auto`] starts walking
/// on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Indicates how [`Chainer`] walks seeds when [`Chainer::run`] is invoked.
///
/// `Auto` walks on the rayon pool when the `parallel` feature is compiled and
/// the seed count reaches the configured threshold, and on the calling thread
/// otherwise. Output is identical either way.
///
/// # Examples
/// ```
/// use kusari_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Let the library choose based on build features and seed count.
    #[default]
    Auto,
    /// Walk every seed on the calling thread.
    Sequential,
    /// Walk seeds on the rayon pool; requires the `parallel` feature.
    Parallel,
}

/// Configures and constructs [`Chainer`] instances.
///
/// # Examples
/// ```
/// use kusari_core::{ChainerBuilder, ExecutionStrategy};
///
/// let chainer = ChainerBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .with_leaves_only(true)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(chainer.execution_strategy(), ExecutionStrategy::Sequential);
/// assert!(chainer.leaves_only());
/// ```
#[derive(Debug, Clone)]
pub struct ChainerBuilder {
    execution_strategy: ExecutionStrategy,
    parallel_threshold: usize,
    leaves_only: bool,
    validate_cluster: bool,
}

impl Default for ChainerBuilder {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            leaves_only: false,
            validate_cluster: false,
        }
    }
}

impl ChainerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kusari_core::{ChainerBuilder, ExecutionStrategy};
    ///
    /// let builder = ChainerBuilder::new();
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.parallel_threshold(), 256);
    /// assert!(!builder.leaves_only());
    /// assert!(!builder.cluster_validation());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy to use when walking seeds.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Overrides the seed count at which [`ExecutionStrategy::Auto`] goes
    /// parallel.
    ///
    /// # Examples
    /// ```
    /// use kusari_core::ChainerBuilder;
    ///
    /// let builder = ChainerBuilder::new().with_parallel_threshold(32);
    /// assert_eq!(builder.parallel_threshold(), 32);
    /// ```
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Keeps only chains with a leaf endpoint in the final set.
    #[must_use]
    pub fn with_leaves_only(mut self, leaves_only: bool) -> Self {
        self.leaves_only = leaves_only;
        self
    }

    /// Returns whether non-leaf chains are discarded.
    #[must_use]
    pub fn leaves_only(&self) -> bool {
        self.leaves_only
    }

    /// Validates the cluster's structure before every run.
    #[must_use]
    pub fn with_cluster_validation(mut self, validate: bool) -> Self {
        self.validate_cluster = validate;
        self
    }

    /// Returns whether clusters are validated before building.
    #[must_use]
    pub fn cluster_validation(&self) -> bool {
        self.validate_cluster
    }

    /// Validates the configuration and constructs a [`Chainer`] instance.
    ///
    /// # Errors
    /// Returns [`ChainError::InvalidParallelThreshold`] when the threshold is
    /// zero and [`ChainError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested without the `parallel`
    /// feature.
    ///
    /// # Examples
    /// ```
    /// use kusari_core::{ChainErrorCode, ChainerBuilder};
    ///
    /// let err = ChainerBuilder::new()
    ///     .with_parallel_threshold(0)
    ///     .build()
    ///     .expect_err("zero threshold is rejected");
    /// assert_eq!(err.code(), ChainErrorCode::InvalidParallelThreshold);
    /// ```
    pub fn build(self) -> Result<Chainer> {
        let parallel_threshold = NonZeroUsize::new(self.parallel_threshold).ok_or(
            ChainError::InvalidParallelThreshold {
                got: self.parallel_threshold,
            },
        )?;

        if self.execution_strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(ChainError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            });
        }

        Ok(Chainer::new(
            self.execution_strategy,
            parallel_threshold,
            self.leaves_only,
            self.validate_cluster,
        ))
    }
}
