//! Error types for the kusari core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A structural defect found in a [`crate::Cluster`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ClusterError {
    /// A link or edge referenced a node outside the cluster.
    #[error("node {node} is out of bounds for a cluster of {node_count} nodes")]
    NodeOutOfBounds {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the cluster.
        node_count: usize,
    },
    /// An edge connected a node to itself.
    #[error("edge {edge} connects node {node} to itself")]
    SelfLoop {
        /// Index of the self-looping edge.
        edge: usize,
        /// The node at both ends of the edge.
        node: usize,
    },
    /// A binary node reached the same neighbour through both of its links.
    #[error("binary node {node} links to neighbour {neighbour} twice")]
    DuplicateBinaryNeighbour {
        /// The binary node violating the invariant.
        node: usize,
        /// The neighbour reached by both links.
        neighbour: usize,
    },
    /// A link had no reciprocal link on the neighbouring node.
    #[error("node {node} links to {neighbour} through edge {edge} but the link is not reciprocated")]
    AsymmetricLink {
        /// Node owning the link.
        node: usize,
        /// Neighbour named by the link.
        neighbour: usize,
        /// Edge named by the link.
        edge: usize,
    },
    /// Supplied point indices did not cover every node.
    #[error("expected {expected} point indices but {actual} were given")]
    PointIndexLengthMismatch {
        /// Number of nodes in the cluster.
        expected: usize,
        /// Number of point indices supplied.
        actual: usize,
    },
    /// A node reported no point index.
    #[error("node {node} has no point index")]
    MissingPointIndex {
        /// Node lacking a point index.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ClusterError`] variants.
    enum ClusterErrorCode for ClusterError {
        /// A link or edge referenced a node outside the cluster.
        NodeOutOfBounds => NodeOutOfBounds { .. } => "CLUSTER_NODE_OUT_OF_BOUNDS",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "CLUSTER_SELF_LOOP",
        /// A binary node reached the same neighbour through both of its links.
        DuplicateBinaryNeighbour => DuplicateBinaryNeighbour { .. } => "CLUSTER_DUPLICATE_BINARY_NEIGHBOUR",
        /// A link had no reciprocal link on the neighbouring node.
        AsymmetricLink => AsymmetricLink { .. } => "CLUSTER_ASYMMETRIC_LINK",
        /// Supplied point indices did not cover every node.
        PointIndexLengthMismatch => PointIndexLengthMismatch { .. } => "CLUSTER_POINT_INDEX_LENGTH_MISMATCH",
        /// A node reported no point index.
        MissingPointIndex => MissingPointIndex { .. } => "CLUSTER_MISSING_POINT_INDEX",
    }
}

/// Error type produced when configuring a [`crate::Chainer`] or building chains.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ChainError {
    /// The cluster contained no nodes.
    #[error("cluster `{cluster}` contains no nodes")]
    EmptyCluster {
        /// Name of the empty cluster.
        cluster: Arc<str>,
    },
    /// No node in the cluster could seed a chain.
    #[error("cluster `{cluster}` has no leaf, complex or loop node to seed a chain from")]
    NoSeeds {
        /// Name of the cluster without seeds.
        cluster: Arc<str>,
    },
    /// Every chain was eliminated by deduplication or splitting.
    #[error("cluster `{cluster}` produced no chains")]
    NoChains {
        /// Name of the cluster that produced no chains.
        cluster: Arc<str>,
    },
    /// The parallel seed threshold must be greater than zero.
    #[error("parallel_threshold must be at least 1 (got {got})")]
    InvalidParallelThreshold {
        /// The invalid threshold supplied by the caller.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// Cluster validation failed before chains were built.
    #[error("cluster `{cluster}` is invalid: {error}")]
    InvalidCluster {
        /// Name of the invalid cluster.
        cluster: Arc<str>,
        #[source]
        /// Structural defect reported by validation.
        error: ClusterError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ChainError`] variants.
    enum ChainErrorCode for ChainError {
        /// The cluster contained no nodes.
        EmptyCluster => EmptyCluster { .. } => "KUSARI_EMPTY_CLUSTER",
        /// No node in the cluster could seed a chain.
        NoSeeds => NoSeeds { .. } => "KUSARI_NO_SEEDS",
        /// Every chain was eliminated by deduplication or splitting.
        NoChains => NoChains { .. } => "KUSARI_NO_CHAINS",
        /// The parallel seed threshold must be greater than zero.
        InvalidParallelThreshold => InvalidParallelThreshold { .. } => "KUSARI_INVALID_PARALLEL_THRESHOLD",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "KUSARI_BACKEND_UNAVAILABLE",
        /// Cluster validation failed before chains were built.
        InvalidCluster => InvalidCluster { .. } => "KUSARI_INVALID_CLUSTER",
    }
}

impl ChainError {
    /// Retrieve the inner [`ClusterErrorCode`] when validation rejected the cluster.
    pub const fn cluster_code(&self) -> Option<ClusterErrorCode> {
        match self {
            Self::InvalidCluster { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ChainError>;
