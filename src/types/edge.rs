//! Adjacency entries, enumerated edges and edge ordering.

use std::fmt;

use serde::Serialize;

use super::{VertexId, Weight};

/// One outgoing adjacency entry: the neighbor and the weight to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Neighbor {
    /// Destination vertex.
    pub vertex: VertexId,
    /// Edge weight (always 1 on unweighted graphs).
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(vertex: VertexId, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

/// A logical edge, as produced by enumeration, sorting and spanning trees.
///
/// Edges enumerated from an undirected graph always have `origin < destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Origin vertex.
    pub origin: VertexId,
    /// Destination vertex.
    pub destination: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(origin: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- {} (weight: {})",
            self.origin, self.destination, self.weight
        )
    }
}

/// Direction in which edges are sorted by weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortOrder {
    /// Lightest first.
    Ascending,
    /// Heaviest first.
    Descending,
}

impl SortOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Parse an order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ascending" | "asc" | "a" | "c" => Some(Self::Ascending),
            "descending" | "desc" | "d" => Some(Self::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
