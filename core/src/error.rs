use thiserror::Error;

use crate::graph::VertexId;

/// Failure conditions surfaced by the graph registry.
///
/// All of these are recoverable and reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The key does not resolve to a stored graph.
    #[error("graph '{0}' not found")]
    NotFound(String),

    /// The start or end vertex is not present in the graph.
    #[error("vertex {0} does not exist in the graph")]
    VertexNotFound(VertexId),

    /// Both vertices exist but no route connects them.
    #[error("no path found from {start} to {end}")]
    NoPathFound { start: VertexId, end: VertexId },

    /// An edge entry did not contain exactly two vertices (strict policy only).
    #[error("edge at index {index} has {len} element(s), expected 2")]
    MalformedEdge { index: usize, len: usize },

    /// The key counter cannot mint another key.
    #[error("graph key space exhausted")]
    KeySpaceExhausted,
}

pub type Result<T> = std::result::Result<T, GraphError>;
