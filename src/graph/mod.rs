//! In-memory weighted digraph, the core data structure.

pub mod builder;
pub mod digraph;
pub mod export;
pub mod shortest_path;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::WeightedDigraph;
pub use shortest_path::{Settled, ShortestPaths};
pub use traversal::{Traversal, TraversalOrder};
