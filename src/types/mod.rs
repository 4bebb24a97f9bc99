//! All data types for the adjacency graph library.

pub mod edge;
pub mod error;

pub use edge::{Edge, Neighbor, SortOrder};
pub use error::{GraphError, GraphResult};

/// Vertex identifier, `0..vertex_count`.
pub type VertexId = usize;

/// Edge weight. Signed so negative weights can reach Floyd-Warshall.
pub type Weight = i64;

/// Effective weight of every edge on an unweighted graph.
pub const UNIT_WEIGHT: Weight = 1;
