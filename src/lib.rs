//! Adjacency graph — in-memory graph engine with classical algorithms.
//!
//! Stores a directed or undirected, weighted or unweighted graph as sorted
//! per-vertex adjacency lists, and runs BFS, Dijkstra, Floyd-Warshall,
//! Kruskal, Prim and Reverse-Delete over it.

pub mod cli;
pub mod demo;
pub mod engine;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use demo::{demo_graph, seed_demo, DEMO_EDGES, DEMO_VERTEX_COUNT};
pub use engine::{
    dijkstra, floyd_warshall, kruskal, prim, reverse_delete, DistanceMatrix, ShortestPaths,
    SpanningTree,
};
pub use graph::{bfs, is_connected, reachable_from, BfsResult, Graph, GraphBuilder};
pub use index::UnionFind;
pub use types::{
    Edge, GraphError, GraphResult, Neighbor, SortOrder, VertexId, Weight, UNIT_WEIGHT,
};
