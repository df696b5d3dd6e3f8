use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node {id} is out of range for a graph with {node_count} nodes")]
    OutOfRange { id: NodeId, node_count: usize },

    #[error("Cycle detected along path {path:?}")]
    CycleDetected { path: Vec<NodeId> },

    #[error("Recursion depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("Invalid weight matrix: {0}")]
    InvalidMatrix(String),

    #[error("Parse error at token {position}: {token:?} is not a valid integer")]
    Parse { position: usize, token: String },

    #[error("Truncated weight matrix: expected {expected} weights, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
