//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::Graph;
pub use builder::GraphBuilder;
pub use traversal::{bfs, is_connected, reachable_from, BfsResult};
