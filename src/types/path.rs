//! Shortest-path result types.

use serde::Serialize;

/// Length and vertex sequence of a single shortest path.
///
/// An unreachable destination is represented by an infinite distance and an
/// empty path. Serializes the distance as `null` in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<L> {
    /// Sum of edge weights along the path.
    pub distance: f64,
    /// Vertices from source to destination, both included.
    pub path: Vec<L>,
}

impl<L> PathResult<L> {
    /// The result for a destination that cannot be reached.
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Split into the `(distance, path)` tuple returned by `dsp`.
    pub fn into_parts(self) -> (f64, Vec<L>) {
        (self.distance, self.path)
    }
}

impl<L> From<(f64, Vec<L>)> for PathResult<L> {
    fn from((distance, path): (f64, Vec<L>)) -> Self {
        Self { distance, path }
    }
}
