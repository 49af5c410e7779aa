//! Error types for the weighted-digraph library.

use thiserror::Error;

/// All errors that can occur while building or querying a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with this label is already in the graph.
    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// The operation referenced a vertex that was never added.
    #[error("Vertex '{0}' does not exist")]
    UnknownVertex(String),

    /// An edge already connects this ordered pair.
    #[error("Edge '{src}' -> '{dest}' already exists")]
    DuplicateEdge { src: String, dest: String },

    /// Edge weight is not a number.
    #[error("Weight of edge '{src}' -> '{dest}' is not a number")]
    InvalidWeight { src: String, dest: String },
}

impl GraphError {
    pub(crate) fn unknown_vertex(label: &impl std::fmt::Display) -> Self {
        Self::UnknownVertex(label.to_string())
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
