//! Auxiliary structures built alongside the graph.

pub mod union_find;

pub use union_find::UnionFind;
