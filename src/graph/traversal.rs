//! Graph traversal algorithms (BFS hop distances, depth-first connectivity).

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

/// Result of a breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    /// Starting vertex.
    pub source: VertexId,
    /// Hop count from `source` per vertex; `None` if unreachable.
    pub distances: Vec<Option<u32>>,
    /// Vertices in the order they were discovered.
    pub visit_order: Vec<VertexId>,
}

/// Hop-count shortest paths from `source`, ignoring edge weights.
///
/// Neighbors are expanded in adjacency order, so the visit order is
/// deterministic for a given graph.
pub fn bfs(graph: &Graph, source: VertexId) -> GraphResult<BfsResult> {
    graph.validate_vertex(source)?;

    let adjacency = graph.adjacency();
    let mut distances: Vec<Option<u32>> = vec![None; graph.vertex_count()];
    let mut visit_order: Vec<VertexId> = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    distances[source] = Some(0);
    visit_order.push(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let depth = distances[current].unwrap_or(0);
        for neighbor in &adjacency[current] {
            if distances[neighbor.vertex].is_some() {
                continue;
            }
            distances[neighbor.vertex] = Some(depth + 1);
            visit_order.push(neighbor.vertex);
            queue.push_back(neighbor.vertex);
        }
    }

    Ok(BfsResult {
        source,
        distances,
        visit_order,
    })
}

/// Mark every vertex reachable from `start` along outgoing edges.
pub fn reachable_from(graph: &Graph, start: VertexId) -> GraphResult<Vec<bool>> {
    graph.validate_vertex(start)?;

    let adjacency = graph.adjacency();
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack: Vec<VertexId> = vec![start];
    visited[start] = true;

    while let Some(current) = stack.pop() {
        for neighbor in &adjacency[current] {
            if !visited[neighbor.vertex] {
                visited[neighbor.vertex] = true;
                stack.push(neighbor.vertex);
            }
        }
    }

    Ok(visited)
}

/// True iff every vertex is reachable from vertex 0.
pub fn is_connected(graph: &Graph) -> GraphResult<bool> {
    if graph.vertex_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    Ok(reachable_from(graph, 0)?.into_iter().all(|seen| seen))
}
