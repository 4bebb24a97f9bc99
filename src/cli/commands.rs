//! CLI command implementations.

use crate::demo::seed_demo;
use crate::engine::{dijkstra, floyd_warshall, kruskal, prim, reverse_delete, SpanningTree};
use crate::graph::{bfs, is_connected, Graph};
use crate::types::{GraphResult, SortOrder, VertexId, Weight};

/// Graph shape and edits requested on the command line.
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Number of vertices.
    pub vertices: usize,
    /// Build a directed graph.
    pub directed: bool,
    /// Keep edge weights.
    pub weighted: bool,
    /// Start from the demonstration edges.
    pub seed_demo: bool,
    /// Extra edges inserted after seeding.
    pub insert: Vec<(VertexId, VertexId, Weight)>,
    /// Edges removed after insertion.
    pub remove: Vec<(VertexId, VertexId)>,
}

/// Build the graph described by `opts`.
pub fn build_graph(opts: &GraphOptions) -> GraphResult<Graph> {
    let mut graph = Graph::new(opts.vertices, opts.directed, opts.weighted);
    if opts.seed_demo {
        seed_demo(&mut graph)?;
    }
    for &(u, v, w) in &opts.insert {
        let inserted = if opts.directed {
            graph.insert_directed_edge(u, v, w)?
        } else {
            graph.insert_edge(u, v, w)?
        };
        if !inserted {
            log::warn!("edge {} -> {} already exists", u, v);
        }
    }
    for &(u, v) in &opts.remove {
        if !graph.remove_edge(u, v)? {
            log::warn!("edge {} -> {} not found", u, v);
        }
    }
    Ok(graph)
}

/// Parse `u,v` or `u,v,w` (weight defaults to 1).
pub fn parse_edge_spec(spec: &str) -> Result<(VertexId, VertexId, Weight), String> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let vertex = |s: &str| {
        s.parse::<VertexId>()
            .map_err(|_| format!("invalid vertex: {:?}", s))
    };
    match parts.as_slice() {
        [u, v] => Ok((vertex(u)?, vertex(v)?, 1)),
        [u, v, w] => {
            let weight = w
                .parse::<Weight>()
                .map_err(|_| format!("invalid weight: {:?}", w))?;
            Ok((vertex(u)?, vertex(v)?, weight))
        }
        _ => Err(format!("expected u,v or u,v,w, got {:?}", spec)),
    }
}

/// Print the adjacency lists.
pub fn cmd_show(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "adjacency": graph.adjacency(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{} graph, {}, {} vertices, {} edges",
            if graph.is_directed() {
                "Directed"
            } else {
                "Undirected"
            },
            if graph.is_weighted() {
                "weighted"
            } else {
                "unweighted"
            },
            graph.vertex_count(),
            graph.edge_count()
        );
        print_adjacency(graph);
    }
    Ok(())
}

/// Hop-count distances from `source`.
pub fn cmd_bfs(graph: &Graph, source: VertexId, json: bool) -> GraphResult<()> {
    let result = bfs(graph, source)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        println!("Distances from vertex {} (BFS):", source);
        for (v, d) in result.distances.iter().enumerate() {
            println!("  Vertex {}: {}", v, format_distance(d.map(Weight::from)));
        }
    }
    Ok(())
}

/// Dijkstra from `source`, then the Floyd-Warshall matrix.
pub fn cmd_shortest(graph: &Graph, source: VertexId, json: bool) -> GraphResult<()> {
    let paths = dijkstra(graph, source)?;
    let matrix = floyd_warshall(graph)?;

    if json {
        let info = serde_json::json!({
            "dijkstra": paths,
            "floyd_warshall": matrix.rows(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Distances from vertex {} (Dijkstra):", source);
        for (v, d) in paths.distances.iter().enumerate() {
            match paths.path_to(v) {
                Some(path) if v != source => println!(
                    "  Vertex {}: {} via {}",
                    v,
                    format_distance(*d),
                    format_path(&path)
                ),
                _ => println!("  Vertex {}: {}", v, format_distance(*d)),
            }
        }
        println!();
        println!("All-pairs distances (Floyd-Warshall):");
        for row in matrix.rows() {
            let cells: Vec<String> = row.iter().map(|d| format_distance(*d)).collect();
            println!("  {}", cells.join("\t"));
        }
    }
    Ok(())
}

/// Minimum spanning tree by Kruskal.
pub fn cmd_kruskal(graph: &Graph, json: bool) -> GraphResult<()> {
    let tree = kruskal(graph)?;
    print_tree("Kruskal", graph.vertex_count(), &tree, json);
    Ok(())
}

/// Minimum spanning tree by Prim.
pub fn cmd_prim(graph: &Graph, json: bool) -> GraphResult<()> {
    let tree = prim(graph)?;
    print_tree("Prim", graph.vertex_count(), &tree, json);
    Ok(())
}

/// Minimum spanning tree by Reverse-Delete; prints the reduced graph.
pub fn cmd_reverse_delete(graph: &mut Graph, json: bool) -> GraphResult<()> {
    let tree = reverse_delete(graph)?;
    print_tree("Reverse-Delete", graph.vertex_count(), &tree, json);
    if !json {
        println!("Remaining graph:");
        print_adjacency(graph);
    }
    Ok(())
}

/// Edges sorted by weight.
pub fn cmd_sort(graph: &Graph, order: SortOrder, json: bool) -> GraphResult<()> {
    let edges = graph.sorted_edges(order);

    if json {
        let info = serde_json::json!({ "order": order.name(), "edges": edges });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Edges sorted by weight ({}):", order);
        for edge in &edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Whether every vertex is reachable from vertex 0.
pub fn cmd_connected(graph: &Graph, json: bool) -> GraphResult<()> {
    let connected = is_connected(graph)?;
    if json {
        println!("{}", serde_json::json!({ "connected": connected }));
    } else if connected {
        println!("Graph is connected");
    } else {
        println!("Graph is not connected");
    }
    Ok(())
}

/// Whether the edge `u -> v` exists.
pub fn cmd_exists(graph: &Graph, u: VertexId, v: VertexId, json: bool) -> GraphResult<()> {
    let weight = graph.edge_weight(u, v)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "origin": u, "destination": v, "exists": weight.is_some(), "weight": weight })
        );
    } else {
        match weight {
            Some(w) => println!("Edge {} -> {} exists (weight: {})", u, v, w),
            None => println!("Edge {} -> {} does not exist", u, v),
        }
    }
    Ok(())
}

fn print_tree(algorithm: &str, vertex_count: usize, tree: &SpanningTree, json: bool) {
    if json {
        let info = serde_json::json!({
            "algorithm": algorithm,
            "edges": tree.edges,
            "total_weight": tree.total_weight,
            "spanning": tree.is_spanning(vertex_count),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Minimum spanning tree ({}):", algorithm);
        for edge in &tree.edges {
            println!("  {}", edge);
        }
        println!("Total weight: {}", tree.total_weight);
        if !tree.is_spanning(vertex_count) {
            println!("Graph is disconnected: result is a spanning forest");
        }
    }
}

fn print_adjacency(graph: &Graph) {
    for (v, list) in graph.adjacency().iter().enumerate() {
        let entries: Vec<String> = list
            .iter()
            .map(|n| format!("({}, weight: {})", n.vertex, n.weight))
            .collect();
        println!("  Vertex {} -> {}", v, entries.join(" -> "));
    }
}

fn format_distance(distance: Option<Weight>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "INF".to_string(),
    }
}

fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
