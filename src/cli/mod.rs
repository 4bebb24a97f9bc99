//! Command-line front end for the `agraph` binary.

pub mod commands;

pub use commands::{build_graph, parse_edge_spec, GraphOptions};
