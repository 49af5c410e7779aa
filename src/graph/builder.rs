//! Fluent API for building WeightedDigraph instances.

use crate::types::{GraphResult, Label};

use super::WeightedDigraph;

/// Fluent builder for constructing a [`WeightedDigraph`].
///
/// Collects vertices and edges without checking them, then validates
/// everything in insertion order on [`build`](Self::build). The first
/// problem found is returned.
pub struct GraphBuilder<L> {
    vertices: Vec<L>,
    edges: Vec<(L, L, f64)>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Queue a vertex.
    pub fn vertex(&mut self, label: impl Into<L>) -> &mut Self {
        self.vertices.push(label.into());
        self
    }

    /// Queue several vertices.
    pub fn vertices<I>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<L>,
    {
        self.vertices.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Queue an edge.
    pub fn edge(
        &mut self,
        src: impl Into<L>,
        dest: impl Into<L>,
        weight: impl Into<f64>,
    ) -> &mut Self {
        self.edges.push((src.into(), dest.into(), weight.into()));
        self
    }

    /// Build the final graph, adding all vertices before any edge.
    pub fn build(&self) -> GraphResult<WeightedDigraph<L>> {
        let mut graph = WeightedDigraph::new();
        for label in &self.vertices {
            graph.add_vertex(label.clone())?;
        }
        for (src, dest, weight) in &self.edges {
            graph.add_edge(src, dest, *weight)?;
        }
        log::debug!(
            "Built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
