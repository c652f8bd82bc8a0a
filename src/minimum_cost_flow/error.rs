use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FlowError {
    #[error("node {node} is out of range (the network has {num_nodes} nodes)")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    #[error("arc capacity must be non-negative")]
    NegativeCapacity,
    #[error("source and sink must be different nodes")]
    SourceEqualsSink,
    #[error("the network has already been solved")]
    AlreadyComputed,
}
