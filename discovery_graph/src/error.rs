//! Graph construction errors.

use crate::node::NodeId;

/// Errors raised while building a graph store.
///
/// All of these are fatal at load time: a puzzle either builds completely or
/// the game does not start.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Two nodes share the same label once lowercased.
    #[error("duplicate node label '{label}'")]
    DuplicateLabel { label: String },

    /// An edge would connect a node to itself.
    #[error("node '{label}' cannot be connected to itself")]
    InvalidEdge { label: String },

    /// A link or starting entry names a node that was never added.
    #[error("unknown node label '{label}'")]
    UnknownLabel { label: String },

    /// A node id does not belong to this store.
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    /// The definition document is not valid JSON for the expected shape.
    #[error("failed to parse graph definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
