use thiserror::Error;

use crate::VertexId;

/// Errors reported by graph analysis entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A source, root or start vertex does not belong to the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
