//! Algorithm tests: traversal, shortest paths, spanning trees.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use adjacency_graph::engine::{dijkstra, floyd_warshall, kruskal, prim, reverse_delete};
use adjacency_graph::graph::{bfs, is_connected, reachable_from, Graph, GraphBuilder};
use adjacency_graph::types::{Edge, GraphError};
use adjacency_graph::demo_graph;

// ==================== Helpers ====================

/// Random graph with `edge_target` attempted insertions and weights in `1..=max_weight`.
fn random_graph(
    rng: &mut StdRng,
    n: usize,
    edge_target: usize,
    directed: bool,
    max_weight: i64,
) -> Graph {
    let mut graph = Graph::new(n, directed, true);
    for _ in 0..edge_target {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.insert_edge(u, v, rng.gen_range(1..=max_weight)).unwrap();
        }
    }
    graph
}

/// Random connected undirected graph: a random spanning path plus extra edges.
fn random_connected_graph(rng: &mut StdRng, n: usize, extra: usize, max_weight: i64) -> Graph {
    let mut graph = random_graph(rng, n, extra, false, max_weight);
    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph.insert_edge(u, v, rng.gen_range(1..=max_weight)).unwrap();
    }
    graph
}

// ==================== BFS ====================

#[test]
fn test_bfs_demo_unweighted() {
    let graph = demo_graph(false, false).unwrap();
    let result = bfs(&graph, 0).unwrap();

    assert_eq!(
        result.distances,
        vec![Some(0), Some(1), Some(1), Some(2), Some(3)]
    );
    assert_eq!(result.visit_order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_bfs_ignores_weights() {
    let graph = demo_graph(false, true).unwrap();
    let result = bfs(&graph, 4).unwrap();
    assert_eq!(
        result.distances,
        vec![Some(3), Some(2), Some(2), Some(1), Some(0)]
    );
}

#[test]
fn test_bfs_directed_unreachable() {
    let graph = demo_graph(true, false).unwrap();
    let result = bfs(&graph, 3).unwrap();

    assert_eq!(result.distances, vec![None, None, None, Some(0), Some(1)]);
    assert_eq!(result.visit_order, vec![3, 4]);
}

#[test]
fn test_bfs_invalid_source() {
    let graph = demo_graph(false, false).unwrap();
    assert!(matches!(
        bfs(&graph, 5),
        Err(GraphError::InvalidVertex { vertex: 5, .. })
    ));
}

#[test]
fn test_bfs_neighbor_distances_differ_by_at_most_one() {
    let mut rng = StdRng::seed_from_u64(0xBF5);
    for _ in 0..20 {
        let graph = random_connected_graph(&mut rng, 30, 40, 9);
        let result = bfs(&graph, 0).unwrap();
        for (u, list) in graph.adjacency().iter().enumerate() {
            let du = result.distances[u].unwrap();
            for n in list {
                let dv = result.distances[n.vertex].unwrap();
                assert!(du.abs_diff(dv) <= 1, "{} -> {}: {} vs {}", u, n.vertex, du, dv);
            }
        }
    }
}

// ==================== Connectivity ====================

#[test]
fn test_demo_graph_is_connected() {
    let graph = demo_graph(false, true).unwrap();
    assert!(is_connected(&graph).unwrap());
}

#[test]
fn test_removing_bridge_disconnects() {
    let mut graph = demo_graph(false, true).unwrap();
    assert!(graph.remove_edge(3, 4).unwrap());
    assert!(!is_connected(&graph).unwrap());

    let seen = reachable_from(&graph, 0).unwrap();
    assert_eq!(seen, vec![true, true, true, true, false]);
}

#[test]
fn test_connectivity_empty_graph() {
    let graph = Graph::new(0, false, true);
    assert_eq!(is_connected(&graph), Err(GraphError::EmptyGraph));
}

#[test]
fn test_connectivity_single_vertex() {
    let graph = Graph::new(1, false, true);
    assert!(is_connected(&graph).unwrap());
}

#[test]
fn test_connectivity_long_path_does_not_recurse() {
    let n = 200_000;
    let mut graph = Graph::new(n, false, false);
    for v in 1..n {
        graph.insert_edge(v - 1, v, 1).unwrap();
    }
    assert!(is_connected(&graph).unwrap());
}

// ==================== Dijkstra ====================

#[test]
fn test_dijkstra_demo() {
    let graph = demo_graph(false, true).unwrap();
    let paths = dijkstra(&graph, 0).unwrap();

    assert_eq!(
        paths.distances,
        vec![Some(0), Some(5), Some(3), Some(5), Some(6)]
    );
    assert_eq!(paths.path_to(4), Some(vec![0, 2, 3, 4]));
    assert_eq!(paths.path_to(0), Some(vec![0]));
    assert_eq!(paths.predecessors[0], None);
}

#[test]
fn test_dijkstra_directed_unreachable() {
    let graph = demo_graph(true, true).unwrap();
    let paths = dijkstra(&graph, 4).unwrap();

    assert_eq!(paths.distances, vec![None, None, None, None, Some(0)]);
    assert_eq!(paths.path_to(0), None);
    assert_eq!(paths.distance(4), Some(0));
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let graph = GraphBuilder::new(3)
        .directed(true)
        .edge(0, 1, 4)
        .edge(1, 2, -2)
        .build()
        .unwrap();

    assert_eq!(
        dijkstra(&graph, 0),
        Err(GraphError::NegativeWeight {
            origin: 1,
            destination: 2,
            weight: -2
        })
    );
}

#[test]
fn test_dijkstra_invalid_source() {
    let graph = demo_graph(false, true).unwrap();
    assert!(dijkstra(&graph, 10).unwrap_err().is_invalid_input());
}

// ==================== Floyd-Warshall ====================

#[test]
fn test_floyd_demo() {
    let graph = demo_graph(false, true).unwrap();
    let matrix = floyd_warshall(&graph).unwrap();

    assert_eq!(matrix.size(), 5);
    assert_eq!(matrix.get(1, 2), Some(8));
    assert_eq!(matrix.get(4, 1), Some(8));
    assert_eq!(matrix.get(4, 0), Some(6));
    for v in 0..5 {
        assert_eq!(matrix.get(v, v), Some(0));
    }
}

#[test]
fn test_floyd_directed_infinity() {
    let graph = demo_graph(true, true).unwrap();
    let matrix = floyd_warshall(&graph).unwrap();

    assert_eq!(matrix.get(0, 4), Some(6));
    assert_eq!(matrix.get(4, 0), None);
    assert_eq!(matrix.rows()[3], vec![None, None, None, Some(0), Some(1)]);
}

#[test]
fn test_floyd_negative_edge_without_cycle() {
    let graph = GraphBuilder::new(3)
        .directed(true)
        .edge(0, 1, 4)
        .edge(0, 2, 1)
        .edge(1, 2, -5)
        .build()
        .unwrap();
    let matrix = floyd_warshall(&graph).unwrap();

    assert_eq!(matrix.get(0, 2), Some(-1));
    assert_eq!(matrix.get(2, 0), None);
}

#[test]
fn test_floyd_negative_cycle() {
    let graph = GraphBuilder::new(3)
        .directed(true)
        .edge(0, 1, 1)
        .edge(1, 0, -3)
        .build()
        .unwrap();
    assert_eq!(floyd_warshall(&graph), Err(GraphError::NegativeCycle(0)));
}

#[test]
fn test_floyd_large_weights_do_not_overflow() {
    let graph = GraphBuilder::new(3)
        .directed(true)
        .edge(0, 1, i64::MAX)
        .edge(1, 2, i64::MAX)
        .build()
        .unwrap();
    let matrix = floyd_warshall(&graph).unwrap();
    assert_eq!(matrix.get(0, 1), Some(i64::MAX));
    assert_eq!(matrix.get(0, 2), None);
}

#[test]
fn test_dijkstra_agrees_with_floyd() {
    let mut rng = StdRng::seed_from_u64(0xD1A5);
    for round in 0..30 {
        let directed = round % 2 == 0;
        let graph = random_graph(&mut rng, 25, 60, directed, 20);
        let matrix = floyd_warshall(&graph).unwrap();
        for source in 0..graph.vertex_count() {
            let paths = dijkstra(&graph, source).unwrap();
            assert_eq!(
                paths.distances,
                matrix.rows()[source],
                "round={} source={}",
                round,
                source
            );
        }
    }
}

// ==================== Spanning trees ====================

#[test]
fn test_kruskal_demo() {
    let graph = demo_graph(false, true).unwrap();
    let tree = kruskal(&graph).unwrap();

    assert_eq!(tree.total_weight, 11);
    assert_eq!(
        tree.edges,
        vec![
            Edge::new(3, 4, 1),
            Edge::new(2, 3, 2),
            Edge::new(0, 2, 3),
            Edge::new(0, 1, 5),
        ]
    );
    assert!(tree.is_spanning(graph.vertex_count()));
}

#[test]
fn test_prim_demo() {
    let graph = demo_graph(false, true).unwrap();
    let tree = prim(&graph).unwrap();

    assert_eq!(tree.total_weight, 11);
    assert_eq!(
        tree.edges,
        vec![
            Edge::new(0, 1, 5),
            Edge::new(0, 2, 3),
            Edge::new(2, 3, 2),
            Edge::new(3, 4, 1),
        ]
    );
}

#[test]
fn test_reverse_delete_demo() {
    let mut graph = demo_graph(false, true).unwrap();
    let tree = reverse_delete(&mut graph).unwrap();

    assert_eq!(tree.total_weight, 11);
    assert_eq!(graph.edge_count(), 4);
    assert!(!graph.edge_exists(1, 3).unwrap());
    assert!(is_connected(&graph).unwrap());
    assert_eq!(tree.edges, graph.edges());
}

#[test]
fn test_spanning_trees_require_undirected_weighted() {
    for (directed, weighted) in [(true, true), (false, false), (true, false)] {
        let mut graph = demo_graph(directed, weighted).unwrap();
        let untouched = graph.clone();

        assert!(matches!(
            kruskal(&graph),
            Err(GraphError::RequiresUndirectedWeighted { algorithm: "Kruskal" })
        ));
        assert!(prim(&graph).unwrap_err().is_precondition());
        assert!(reverse_delete(&mut graph).is_err());
        assert_eq!(graph, untouched);
    }
}

#[test]
fn test_spanning_forest_on_disconnected_graph() {
    let build = || {
        GraphBuilder::new(5)
            .edges(&[(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 6)])
            .build()
            .unwrap()
    };

    let graph = build();
    let k = kruskal(&graph).unwrap();
    let p = prim(&graph).unwrap();
    let mut consumed = build();
    let r = reverse_delete(&mut consumed).unwrap();

    assert_eq!(k.total_weight, 9);
    assert_eq!(k.edges.len(), 3);
    assert!(!k.is_spanning(5));

    // Prim only grows the component holding vertex 0.
    assert_eq!(p.total_weight, 3);
    assert_eq!(p.edges.len(), 2);

    assert_eq!(r.total_weight, 9);
    assert!(!consumed.edge_exists(0, 1).unwrap());
    assert!(consumed.edge_exists(3, 4).unwrap());
}

#[test]
fn test_spanning_trees_on_trivial_graphs() {
    let empty = Graph::new(0, false, true);
    assert_eq!(kruskal(&empty).unwrap().total_weight, 0);
    assert!(prim(&empty).unwrap().edges.is_empty());
    let mut empty = empty;
    assert!(reverse_delete(&mut empty).unwrap().is_spanning(0));

    let single = Graph::new(1, false, true);
    assert!(prim(&single).unwrap().is_spanning(1));
}

#[test]
fn test_mst_algorithms_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x357);
    for round in 0..25 {
        let graph = random_connected_graph(&mut rng, 20, 40, 15);
        let k = kruskal(&graph).unwrap();
        let p = prim(&graph).unwrap();
        let mut consumed = graph.clone();
        let r = reverse_delete(&mut consumed).unwrap();

        assert_eq!(k.total_weight, p.total_weight, "round={}", round);
        assert_eq!(k.total_weight, r.total_weight, "round={}", round);
        assert!(k.is_spanning(20));
        assert!(p.is_spanning(20));
        assert!(r.is_spanning(20));
        assert!(is_connected(&consumed).unwrap());
    }
}
