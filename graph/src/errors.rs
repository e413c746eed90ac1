use thiserror::Error;

use crate::vertex::VertexId;

/// Error produced when a graph operation fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} is not in the graph")]
    InvalidVertex(VertexId),
}

/// Result when a graph operation might fail.
pub type Result<T> = std::result::Result<T, GraphError>;
