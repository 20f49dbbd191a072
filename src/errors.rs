use thiserror::Error;

use crate::node::{NodeId, Side};

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("root is already initialized")]
    RootAlreadySet,

    #[error("{side} child of {parent} is already initialized")]
    ChildOccupied { parent: NodeId, side: Side },

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("invalid node: {0} is not part of this tree")]
    InvalidNode(NodeId),

    #[error("failed to write traversal output: {0}")]
    Io(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
