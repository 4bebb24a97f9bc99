//! Weighted shortest paths: Dijkstra (single source) and Floyd-Warshall (all pairs).

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, VertexId, Weight};

/// Single-source shortest paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// Starting vertex.
    pub source: VertexId,
    /// Minimum total weight from `source`; `None` if unreachable.
    pub distances: Vec<Option<Weight>>,
    /// Previous vertex on a shortest path; `None` for the source and unreachable vertices.
    pub predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// Distance to `target`, if reachable.
    pub fn distance(&self, target: VertexId) -> Option<Weight> {
        self.distances.get(target).copied().flatten()
    }

    /// Vertices from `source` to `target`, inclusive.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dense all-pairs distance matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    rows: Vec<Vec<Option<Weight>>>,
}

impl DistanceMatrix {
    /// Number of vertices (rows and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Distance from `from` to `to`; `None` if unreachable or out of range.
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.rows.get(from)?.get(to).copied().flatten()
    }

    /// All rows, indexed by origin vertex.
    pub fn rows(&self) -> &[Vec<Option<Weight>>] {
        &self.rows
    }
}

/// Minimum total weight from `source` to every vertex.
///
/// Uses the O(V^2) select-minimum loop. Ties between equally distant
/// vertices go to the lowest vertex ID.
pub fn dijkstra(graph: &Graph, source: VertexId) -> GraphResult<ShortestPaths> {
    graph.validate_vertex(source)?;
    ensure_non_negative(graph)?;

    let n = graph.vertex_count();
    let adjacency = graph.adjacency();
    let mut distances: Vec<Option<Weight>> = vec![None; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];

    distances[source] = Some(0);

    loop {
        let mut selected: Option<(VertexId, Weight)> = None;
        for v in 0..n {
            if visited[v] {
                continue;
            }
            if let Some(d) = distances[v] {
                if selected.map_or(true, |(_, best)| d < best) {
                    selected = Some((v, d));
                }
            }
        }

        let Some((u, dist_u)) = selected else {
            break;
        };
        visited[u] = true;

        for neighbor in &adjacency[u] {
            if visited[neighbor.vertex] {
                continue;
            }
            let Some(candidate) = dist_u.checked_add(neighbor.weight) else {
                continue;
            };
            if distances[neighbor.vertex].map_or(true, |current| candidate < current) {
                distances[neighbor.vertex] = Some(candidate);
                predecessors[neighbor.vertex] = Some(u);
            }
        }
    }

    log::debug!(
        "dijkstra from {}: {} of {} vertices reachable",
        source,
        visited.iter().filter(|&&seen| seen).count(),
        n
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Minimum distance between every ordered pair of vertices.
///
/// Negative edge weights are accepted; a negative cycle is reported as
/// [`GraphError::NegativeCycle`].
pub fn floyd_warshall(graph: &Graph) -> GraphResult<DistanceMatrix> {
    let n = graph.vertex_count();
    let mut dist: Vec<Vec<Option<Weight>>> = vec![vec![None; n]; n];

    for (i, list) in graph.adjacency().iter().enumerate() {
        dist[i][i] = Some(0);
        for neighbor in list {
            dist[i][neighbor.vertex] = Some(neighbor.weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(through_k) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(k_to_j) = dist[k][j] else {
                    continue;
                };
                let Some(candidate) = through_k.checked_add(k_to_j) else {
                    continue;
                };
                if dist[i][j].map_or(true, |current| candidate < current) {
                    dist[i][j] = Some(candidate);
                }
            }
        }
    }

    if let Some(v) = (0..n).find(|&v| dist[v][v].is_some_and(|d| d < 0)) {
        return Err(GraphError::NegativeCycle(v));
    }

    Ok(DistanceMatrix { rows: dist })
}

fn ensure_non_negative(graph: &Graph) -> GraphResult<()> {
    for (origin, list) in graph.adjacency().iter().enumerate() {
        if let Some(neighbor) = list.iter().find(|n| n.weight < 0) {
            return Err(GraphError::NegativeWeight {
                origin,
                destination: neighbor.vertex,
                weight: neighbor.weight,
            });
        }
    }
    Ok(())
}
