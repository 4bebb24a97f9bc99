//! Algorithm suite — weighted shortest paths and minimum spanning trees.

pub mod shortest_path;
pub mod spanning_tree;

pub use shortest_path::{dijkstra, floyd_warshall, DistanceMatrix, ShortestPaths};
pub use spanning_tree::{kruskal, prim, reverse_delete, SpanningTree};
