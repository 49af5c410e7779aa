//! A small in-memory directed graph with weighted edges.
//!
//! Vertices are added by label, edges by `(src, dest, weight)`. The graph
//! supports depth-first and breadth-first walks, Dijkstra-style shortest
//! paths and a GraphViz DOT export.
//!
//! ```
//! use weighted_digraph::WeightedDigraph;
//!
//! let mut graph: WeightedDigraph<String> = WeightedDigraph::new();
//! graph.add_vertex("A")?.add_vertex("B")?.add_vertex("C")?;
//! graph.add_edge("A", "B", 2)?.add_edge("B", "C", 1.5)?;
//!
//! let order: Vec<_> = graph.dfs("A")?.cloned().collect();
//! assert_eq!(order, ["A", "B", "C"]);
//!
//! let (length, path) = graph.dsp("A", "C")?;
//! assert_eq!(length, 3.5);
//! assert_eq!(path, ["A", "B", "C"]);
//! # Ok::<(), weighted_digraph::GraphError>(())
//! ```

pub mod cli;
pub mod fixture;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    GraphBuilder, Settled, ShortestPaths, Traversal, TraversalOrder, WeightedDigraph,
};
pub use types::{GraphError, GraphResult, Label, PathResult, NO_EDGE};
