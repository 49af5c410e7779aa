//! CLI entry point for the `wdg` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use weighted_digraph::cli::{commands, parse_edge, EdgeSpec, GraphInput};
use weighted_digraph::{GraphError, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "wdg",
    about = "Weighted digraph CLI: build a graph from arguments and query it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Start from the six-vertex reference graph
    #[arg(long, global = true)]
    demo: bool,

    /// Add a vertex (repeatable)
    #[arg(long = "vertex", value_name = "LABEL", global = true)]
    vertices: Vec<String>,

    /// Add an edge SRC:DEST:WEIGHT (repeatable, vertices must exist)
    #[arg(long = "edge", value_name = "SRC:DEST:WEIGHT", value_parser = parse_edge, global = true)]
    edges: Vec<EdgeSpec>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full report: export, DFS, BFS, one shortest path, all shortest paths
    Demo {
        /// Source vertex
        #[arg(default_value = "A")]
        src: String,
        /// Destination vertex for the single shortest path
        #[arg(default_value = "F")]
        dest: String,
    },
    /// Show vertex and edge counts
    Info,
    /// Print the graph in GraphViz DOT notation
    Export,
    /// Depth-first order from a vertex
    Dfs {
        /// Starting vertex
        start: String,
    },
    /// Breadth-first order from a vertex
    Bfs {
        /// Starting vertex
        start: String,
    },
    /// Shortest path between two vertices
    Path {
        /// Source vertex
        src: String,
        /// Destination vertex
        dest: String,
    },
    /// Shortest paths from a vertex to every vertex
    Paths {
        /// Source vertex
        src: String,
    },
    /// Weight of the edge between two vertices
    Weight {
        /// Source vertex
        src: String,
        /// Destination vertex
        dest: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    // The demo command always runs over the reference graph.
    let input = GraphInput {
        demo: cli.demo || matches!(cli.command, Commands::Demo { .. }),
        vertices: cli.vertices,
        edges: cli.edges,
    };

    let result = input.build().and_then(|graph| match &cli.command {
        Commands::Demo { src, dest } => commands::cmd_demo(&graph, src, dest, json),
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::Export => commands::cmd_export(&graph, json),
        Commands::Dfs { start } => {
            commands::cmd_walk(&graph, start, TraversalOrder::DepthFirst, json)
        }
        Commands::Bfs { start } => {
            commands::cmd_walk(&graph, start, TraversalOrder::BreadthFirst, json)
        }
        Commands::Path { src, dest } => commands::cmd_path(&graph, src, dest, json),
        Commands::Paths { src } => commands::cmd_paths(&graph, src, json),
        Commands::Weight { src, dest } => commands::cmd_weight(&graph, src, dest, json),
    });

    match result {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::UnknownVertex(_) => 4,
                GraphError::DuplicateVertex(_)
                | GraphError::DuplicateEdge { .. }
                | GraphError::InvalidWeight { .. } => 5,
            };
            process::exit(code);
        }
    }
}
