//! All data types for the weighted-digraph library.

pub mod error;
pub mod label;
pub mod path;

pub use error::{GraphError, GraphResult};
pub use label::Label;
pub use path::PathResult;

/// Weight reported for an ordered pair of vertices with no edge between them.
pub const NO_EDGE: f64 = f64::INFINITY;
