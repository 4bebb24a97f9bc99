//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId, Weight};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Edges are replayed through the graph's public insert operations on
/// [`GraphBuilder::build`], so validation and duplicate rejection behave
/// exactly as they do for incremental insertion.
pub struct GraphBuilder {
    vertex_count: usize,
    directed: bool,
    weighted: bool,
    edges: Vec<(VertexId, VertexId, Weight, bool)>,
}

impl GraphBuilder {
    /// Create a builder for an undirected, weighted graph.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            directed: false,
            weighted: true,
            edges: Vec::new(),
        }
    }

    /// Set whether the graph is directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set whether the graph keeps edge weights.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Add an edge (mirrored if the graph is undirected).
    pub fn edge(mut self, u: VertexId, v: VertexId, weight: Weight) -> Self {
        self.edges.push((u, v, weight, false));
        self
    }

    /// Add a one-way edge regardless of the graph's direction.
    pub fn directed_edge(mut self, u: VertexId, v: VertexId, weight: Weight) -> Self {
        self.edges.push((u, v, weight, true));
        self
    }

    /// Add several edges at once.
    pub fn edges(mut self, edges: &[(VertexId, VertexId, Weight)]) -> Self {
        self.edges
            .extend(edges.iter().map(|&(u, v, w)| (u, v, w, false)));
        self
    }

    /// Build the final Graph. Fails on the first invalid edge.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.vertex_count, self.directed, self.weighted);
        for (u, v, weight, one_way) in self.edges {
            let inserted = if one_way {
                graph.insert_directed_edge(u, v, weight)?
            } else {
                graph.insert_edge(u, v, weight)?
            };
            if !inserted {
                log::warn!("duplicate edge {} -> {} ignored", u, v);
            }
        }
        Ok(graph)
    }
}
