//! The six-vertex reference graph used by the `demo` command and the tests.

use crate::graph::{GraphBuilder, WeightedDigraph};
use crate::types::GraphResult;

/// Vertices of the reference graph, in insertion order.
pub const REFERENCE_VERTICES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Edges of the reference graph as `(src, dest, weight)`, in insertion order.
pub const REFERENCE_EDGES: [(&str, &str, u32); 10] = [
    ("A", "B", 2),
    ("A", "F", 9),
    ("B", "C", 2),
    ("C", "D", 1),
    ("B", "D", 15),
    ("B", "F", 6),
    ("F", "B", 6),
    ("F", "E", 3),
    ("E", "D", 3),
    ("E", "C", 7),
];

/// Build the reference graph.
pub fn reference_graph() -> GraphResult<WeightedDigraph<String>> {
    let mut builder = GraphBuilder::new();
    builder.vertices(REFERENCE_VERTICES);
    for (src, dest, weight) in REFERENCE_EDGES {
        builder.edge(src, dest, weight);
    }
    builder.build()
}
