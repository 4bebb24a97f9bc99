//! Demonstration data: the fixed 5-vertex example graph.

use crate::graph::Graph;
use crate::types::{GraphResult, VertexId, Weight};

/// Vertex count of the demonstration graph.
pub const DEMO_VERTEX_COUNT: usize = 5;

/// Edges of the demonstration graph. Weights collapse to 1 on unweighted graphs.
pub const DEMO_EDGES: [(VertexId, VertexId, Weight); 5] =
    [(0, 1, 5), (0, 2, 3), (1, 3, 7), (2, 3, 2), (3, 4, 1)];

/// Populate `graph` with the demonstration edges.
///
/// Directed graphs get one-way edges; undirected graphs get mirrored ones.
/// Returns the number of edges actually inserted.
pub fn seed_demo(graph: &mut Graph) -> GraphResult<usize> {
    let mut inserted = 0;
    for (u, v, weight) in DEMO_EDGES {
        let added = if graph.is_directed() {
            graph.insert_directed_edge(u, v, weight)?
        } else {
            graph.insert_edge(u, v, weight)?
        };
        if added {
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Build the 5-vertex demonstration graph with the given shape.
pub fn demo_graph(directed: bool, weighted: bool) -> GraphResult<Graph> {
    let mut graph = Graph::new(DEMO_VERTEX_COUNT, directed, weighted);
    seed_demo(&mut graph)?;
    Ok(graph)
}
