//! Minimum spanning trees: Kruskal, Prim and Reverse-Delete.
//!
//! All three require an undirected, weighted graph. On a disconnected graph
//! they return a minimum spanning forest without signalling an error; use
//! [`SpanningTree::is_spanning`] to tell the two apart.

use serde::Serialize;

use crate::graph::{is_connected, reachable_from, Graph};
use crate::index::UnionFind;
use crate::types::{Edge, GraphError, GraphResult, SortOrder, VertexId, Weight};

/// Edges of a minimum spanning tree (or forest) and their total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Accepted edges, in the order the algorithm produced them.
    pub edges: Vec<Edge>,
    /// Sum of accepted weights.
    pub total_weight: Weight,
}

impl SpanningTree {
    fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// True if the edges connect all `vertex_count` vertices.
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count || (vertex_count == 0 && self.edges.is_empty())
    }
}

/// Kruskal: accept edges lightest first unless they close a cycle.
pub fn kruskal(graph: &Graph) -> GraphResult<SpanningTree> {
    ensure_undirected_weighted(graph, "Kruskal")?;

    let mut components = UnionFind::new(graph.vertex_count());
    let mut accepted = Vec::new();

    for edge in graph.sorted_edges(SortOrder::Ascending) {
        if components.union(edge.origin, edge.destination) {
            log::debug!("kruskal: accepted {}", edge);
            accepted.push(edge);
        } else {
            log::debug!("kruskal: rejected {} (cycle)", edge);
        }
    }

    Ok(SpanningTree::from_edges(accepted))
}

/// Prim: grow a tree from vertex 0, always attaching the cheapest vertex.
///
/// Edges are reported as `parent -- child`, ordered by child ID.
pub fn prim(graph: &Graph) -> GraphResult<SpanningTree> {
    ensure_undirected_weighted(graph, "Prim")?;

    let n = graph.vertex_count();
    if n == 0 {
        return Ok(SpanningTree::from_edges(Vec::new()));
    }

    let adjacency = graph.adjacency();
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut in_tree = vec![false; n];
    key[0] = Some(0);

    loop {
        let mut selected: Option<(VertexId, Weight)> = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            if let Some(k) = key[v] {
                if selected.map_or(true, |(_, best)| k < best) {
                    selected = Some((v, k));
                }
            }
        }

        let Some((u, _)) = selected else {
            break;
        };
        in_tree[u] = true;

        for neighbor in &adjacency[u] {
            if in_tree[neighbor.vertex] {
                continue;
            }
            if key[neighbor.vertex].map_or(true, |current| neighbor.weight < current) {
                key[neighbor.vertex] = Some(neighbor.weight);
                parent[neighbor.vertex] = Some(u);
            }
        }
    }

    let edges: Vec<Edge> = (1..n)
        .filter_map(|v| {
            let p = parent[v]?;
            Some(Edge::new(p, v, key[v]?))
        })
        .collect();

    if edges.len() + 1 < n {
        log::debug!(
            "prim: graph is disconnected, tree covers {} vertices",
            edges.len() + 1
        );
    }

    Ok(SpanningTree::from_edges(edges))
}

/// Reverse-Delete: drop edges heaviest first unless they are essential.
///
/// This consumes `graph`: on return it holds exactly the spanning tree's
/// edges. On a connected graph an edge is essential when removing it
/// disconnects the graph; on a disconnected graph, when removing it
/// separates its own endpoints.
pub fn reverse_delete(graph: &mut Graph) -> GraphResult<SpanningTree> {
    ensure_undirected_weighted(graph, "Reverse-Delete")?;

    if graph.vertex_count() == 0 {
        return Ok(SpanningTree::from_edges(Vec::new()));
    }
    let whole_graph = is_connected(graph)?;

    for edge in graph.sorted_edges(SortOrder::Descending) {
        graph.remove_edge(edge.origin, edge.destination)?;

        let still_connected = if whole_graph {
            is_connected(graph)?
        } else {
            reachable_from(graph, edge.origin)?[edge.destination]
        };

        if still_connected {
            log::debug!("reverse-delete: dropped {}", edge);
        } else {
            graph.insert_edge(edge.origin, edge.destination, edge.weight)?;
            log::debug!("reverse-delete: kept {} (essential)", edge);
        }
    }

    Ok(SpanningTree::from_edges(graph.edges()))
}

fn ensure_undirected_weighted(graph: &Graph, algorithm: &'static str) -> GraphResult<()> {
    if graph.is_directed() || !graph.is_weighted() {
        return Err(GraphError::RequiresUndirectedWeighted { algorithm });
    }
    Ok(())
}
