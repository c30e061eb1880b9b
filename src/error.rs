//! Error types for graph construction and analysis

use thiserror::Error;

/// Errors raised by the graph store, builder, and analyzers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A graph was requested with no vertices
    #[error("graph requires at least one vertex")]
    InvalidConfiguration,

    /// A vertex id outside [0, vertex_count) was passed to an operation
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// A self-loop was attempted; the graph is simple
    #[error("self-loop on vertex {0} is not allowed in a simple graph")]
    InvalidEdge(usize),

    /// An interaction referenced a login absent from the contributor roster
    #[error("login {0:?} is missing from the contributor roster")]
    UnknownIdentity(String),
}
