//! Error types for the adjacency graph library.

use thiserror::Error;

use super::{VertexId, Weight};

/// All errors that can occur in the adjacency graph library.
///
/// Duplicate insertions and removals of absent edges are not errors; those
/// operations report `Ok(false)` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex ID outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(VertexId),

    /// The operation needs at least one vertex.
    #[error("Graph has no vertices")]
    EmptyGraph,

    /// Spanning-tree algorithm called on a directed or unweighted graph.
    #[error("{algorithm} requires an undirected, weighted graph")]
    RequiresUndirectedWeighted { algorithm: &'static str },

    /// Dijkstra found a negative edge weight.
    #[error("Negative weight {weight} on edge {origin} -> {destination}")]
    NegativeWeight {
        origin: VertexId,
        destination: VertexId,
        weight: Weight,
    },

    /// Floyd-Warshall found a cycle of negative total weight.
    #[error("Negative cycle through vertex {0}")]
    NegativeCycle(VertexId),
}

impl GraphError {
    /// True for failures caused by bad vertex arguments.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidVertex { .. } | Self::SelfLoop(_))
    }

    /// True for algorithm precondition violations.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::EmptyGraph
                | Self::RequiresUndirectedWeighted { .. }
                | Self::NegativeWeight { .. }
                | Self::NegativeCycle(_)
        )
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
