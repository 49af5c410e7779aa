//! Core graph structure: labelled vertices + weighted adjacency lists.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult, Label, NO_EDGE};

/// A directed graph whose edges carry a numeric weight.
///
/// Vertices are stored in insertion order and each vertex keeps its outgoing
/// edges in insertion order too. Every traversal and the DOT export follow
/// that order, which makes their output deterministic.
///
/// The graph only grows: there is no API to remove a vertex or an edge, or
/// to change a weight once the edge exists.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<L> {
    /// Vertex labels, indexed by vertex position.
    labels: Vec<L>,
    /// Label -> vertex position.
    index: HashMap<L, usize>,
    /// Outgoing edges per vertex position: (destination position, weight).
    adjacency: Vec<Vec<(usize, f64)>>,
    /// Weight lookup by (source position, destination position).
    weights: HashMap<(usize, usize), f64>,
    /// Number of edges added so far.
    edge_count: usize,
}

impl<L> Default for WeightedDigraph<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            weights: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<L: Label> WeightedDigraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether a vertex with this label exists.
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(label)
    }

    /// Whether an edge `src -> dest` exists. Unknown vertices simply yield `false`.
    pub fn contains_edge<Q>(&self, src: &Q, dest: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.index.get(src), self.index.get(dest)) {
            (Some(&s), Some(&d)) => self.weights.contains_key(&(s, d)),
            _ => false,
        }
    }

    /// Add a vertex. Returns the graph so insertions can be chained.
    pub fn add_vertex(&mut self, label: impl Into<L>) -> GraphResult<&mut Self> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label.to_string()));
        }

        let position = self.labels.len();
        log::debug!("Added vertex '{}' at position {}", label, position);
        self.index.insert(label.clone(), position);
        self.labels.push(label);
        self.adjacency.push(Vec::new());

        Ok(self)
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Any integer or float type that converts losslessly into `f64` is
    /// accepted as a weight. Negative weights are stored, but the shortest
    /// path search assumes non-negative weights and gives no optimality
    /// guarantee once one is present.
    pub fn add_edge<Q>(
        &mut self,
        src: &Q,
        dest: &Q,
        weight: impl Into<f64>,
    ) -> GraphResult<&mut Self>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let weight = weight.into();
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight {
                src: src.to_string(),
                dest: dest.to_string(),
            });
        }

        let s = self.position(src)?;
        let d = self.position(dest)?;

        if self.weights.contains_key(&(s, d)) {
            return Err(GraphError::DuplicateEdge {
                src: src.to_string(),
                dest: dest.to_string(),
            });
        }

        if weight < 0.0 {
            log::warn!(
                "Edge '{}' -> '{}' has negative weight {}; shortest paths may be wrong",
                src,
                dest,
                weight
            );
        }

        self.adjacency[s].push((d, weight));
        self.weights.insert((s, d), weight);
        self.edge_count += 1;
        log::debug!("Added edge '{}' -> '{}' ({})", src, dest, weight);

        Ok(self)
    }

    /// Weight of the edge `src -> dest`.
    ///
    /// Both vertices must exist. When they do but are not connected the
    /// weight is positive infinity.
    pub fn get_weight<Q>(&self, src: &Q, dest: &Q) -> GraphResult<f64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let s = self.position(src)?;
        let d = self.position(dest)?;
        Ok(self.weights.get(&(s, d)).copied().unwrap_or(NO_EDGE))
    }

    /// All vertex labels in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter()
    }

    /// Outgoing edges of a vertex as `(destination, weight)`, in insertion order.
    pub fn neighbors<Q>(&self, label: &Q) -> GraphResult<impl Iterator<Item = (&L, f64)> + '_>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let position = self.position(label)?;
        Ok(self.adjacency[position]
            .iter()
            .map(move |&(d, w)| (&self.labels[d], w)))
    }

    /// Every edge as `(source, destination, weight)`.
    ///
    /// Grouped by source in vertex insertion order, then by edge insertion
    /// order within each source.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(s, out)| {
            out.iter()
                .map(move |&(d, w)| (&self.labels[s], &self.labels[d], w))
        })
    }

    /// Resolve a label to its vertex position.
    pub(crate) fn position<Q>(&self, label: &Q) -> GraphResult<usize>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::unknown_vertex(&label))
    }

    /// Label of the vertex at `position`.
    pub(crate) fn label(&self, position: usize) -> &L {
        &self.labels[position]
    }

    /// Outgoing edges of the vertex at `position`.
    pub(crate) fn out_edges(&self, position: usize) -> &[(usize, f64)] {
        &self.adjacency[position]
    }
}
