use kusari_core::ClusterError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected two node ids but found `{content}`")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: `{token}` is not a valid node id")]
    InvalidNodeId { line: usize, token: String },
    #[error("line {line}: node id {node} needs more than {limit} nodes for this edge list")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        limit: usize,
    },
    #[error("line {line}: point index {point} is not below the point count {point_count}")]
    PointOutOfRange {
        line: usize,
        point: usize,
        point_count: usize,
    },
    #[error("edge list contains no edges")]
    EmptyInput,
    #[error("edge list does not describe a valid cluster: {0}")]
    Cluster(#[from] ClusterError),
}
