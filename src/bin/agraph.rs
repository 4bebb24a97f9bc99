//! CLI entry point for the `agraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use adjacency_graph::cli::{build_graph, commands, parse_edge_spec, GraphOptions};
use adjacency_graph::types::{GraphError, SortOrder, VertexId, Weight};
use adjacency_graph::DEMO_VERTEX_COUNT;

#[derive(Parser)]
#[command(
    name = "agraph",
    about = "Adjacency graph CLI — shortest paths and spanning trees over a small graph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Build a directed graph
    #[arg(long, global = true)]
    directed: bool,

    /// Ignore edge weights (every edge weighs 1)
    #[arg(long, global = true)]
    unweighted: bool,

    /// Number of vertices
    #[arg(long, default_value_t = DEMO_VERTEX_COUNT, global = true)]
    vertices: usize,

    /// Start from an empty graph instead of the demonstration edges
    #[arg(long, global = true)]
    empty: bool,

    /// Insert an edge "u,v" or "u,v,w" (repeatable)
    #[arg(long = "edge", value_parser = parse_edge_spec, global = true)]
    edges: Vec<(VertexId, VertexId, Weight)>,

    /// Remove an edge "u,v" (repeatable)
    #[arg(long = "remove", value_parser = parse_edge_spec, global = true)]
    removals: Vec<(VertexId, VertexId, Weight)>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the adjacency lists
    Show,
    /// Hop-count shortest paths (BFS)
    Bfs {
        /// Starting vertex
        source: VertexId,
    },
    /// Weighted shortest paths (Dijkstra, then Floyd-Warshall)
    Shortest {
        /// Starting vertex for Dijkstra
        source: VertexId,
    },
    /// Minimum spanning tree — Kruskal
    Kruskal,
    /// Minimum spanning tree — Prim
    Prim,
    /// Minimum spanning tree — Reverse-Delete
    ReverseDelete,
    /// List edges sorted by weight
    Sort {
        /// Order: asc or desc
        #[arg(default_value = "asc")]
        order: String,
    },
    /// Check whether every vertex is reachable from vertex 0
    Connected,
    /// Check whether an edge exists
    Exists {
        /// Origin vertex
        origin: VertexId,
        /// Destination vertex
        destination: VertexId,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let opts = GraphOptions {
        vertices: cli.vertices,
        directed: cli.directed,
        weighted: !cli.unweighted,
        seed_demo: !cli.empty,
        insert: cli.edges,
        remove: cli.removals.into_iter().map(|(u, v, _)| (u, v)).collect(),
    };

    let result = build_graph(&opts).and_then(|mut graph| match cli.command {
        Commands::Show => commands::cmd_show(&graph, json),
        Commands::Bfs { source } => commands::cmd_bfs(&graph, source, json),
        Commands::Shortest { source } => commands::cmd_shortest(&graph, source, json),
        Commands::Kruskal => commands::cmd_kruskal(&graph, json),
        Commands::Prim => commands::cmd_prim(&graph, json),
        Commands::ReverseDelete => commands::cmd_reverse_delete(&mut graph, json),
        Commands::Sort { order } => {
            let order = match SortOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid sort order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_sort(&graph, order, json)
        }
        Commands::Connected => commands::cmd_connected(&graph, json),
        Commands::Exists {
            origin,
            destination,
        } => commands::cmd_exists(&graph, origin, destination, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidVertex { .. } | GraphError::SelfLoop(_) => 3,
            e if e.is_precondition() => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
