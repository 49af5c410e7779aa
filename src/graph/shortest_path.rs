//! Dijkstra-style shortest paths over a sorted frontier.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::types::{GraphResult, Label, PathResult};

use super::WeightedDigraph;

/// A vertex whose shortest distance from the source has been settled.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled<'g, L> {
    /// The finalized vertex.
    pub vertex: &'g L,
    /// Total weight of the path to it.
    pub distance: f64,
    /// Vertices from the source to `vertex`, both included.
    pub path: Vec<&'g L>,
}

impl<'g, L: Clone> Settled<'g, L> {
    /// Clone the borrowed labels into an owned [`PathResult`].
    pub fn to_path_result(&self) -> PathResult<L> {
        PathResult {
            distance: self.distance,
            path: self.path.iter().map(|&l| l.clone()).collect(),
        }
    }
}

/// Candidate entry on the frontier.
#[derive(Debug, Clone)]
struct Candidate {
    vertex: usize,
    distance: f64,
    path: Vec<usize>,
}

/// Frontier kept sorted ascending by distance.
///
/// A new candidate goes in front of the first entry whose distance is not
/// smaller than its own, so among equal distances the newest comes first.
#[derive(Debug, Default)]
struct Frontier {
    entries: Vec<Candidate>,
}

impl Frontier {
    fn insert(&mut self, candidate: Candidate) {
        let at = self
            .entries
            .iter()
            .position(|c| candidate.distance <= c.distance)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, candidate);
    }

    fn pop_min(&mut self) -> Option<Candidate> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    fn find(&self, vertex: usize) -> Option<usize> {
        self.entries.iter().position(|c| c.vertex == vertex)
    }

    /// Offer a candidate: add it if the vertex is new to the frontier, or
    /// replace the existing entry when the new distance is strictly shorter.
    fn relax(&mut self, candidate: Candidate) {
        match self.find(candidate.vertex) {
            None => self.insert(candidate),
            Some(i) if candidate.distance < self.entries[i].distance => {
                self.entries.remove(i);
                self.insert(candidate);
            }
            Some(_) => {}
        }
    }
}

/// Lazy single-source shortest path enumeration.
///
/// Yields every vertex reachable from the source exactly once, in the order
/// the search finalizes them (non-decreasing distance when all weights are
/// non-negative). The source comes first with distance zero.
///
/// Relaxation is eager: when a vertex is expanded, each outgoing edge to a
/// vertex not yet finalized immediately updates that vertex's frontier
/// entry. With negative weights the search still terminates but the
/// distances are not guaranteed to be minimal.
pub struct ShortestPaths<'g, L> {
    graph: &'g WeightedDigraph<L>,
    visited: Vec<bool>,
    frontier: Frontier,
}

impl<'g, L: Label> ShortestPaths<'g, L> {
    fn new(graph: &'g WeightedDigraph<L>, source: usize) -> Self {
        let mut frontier = Frontier::default();
        frontier.insert(Candidate {
            vertex: source,
            distance: 0.0,
            path: vec![source],
        });
        Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            frontier,
        }
    }

    /// Finalize the nearest frontier entry and relax its outgoing edges.
    fn settle_next(&mut self) -> Option<Candidate> {
        let settled = self.frontier.pop_min()?;
        self.expand(&settled);
        log::trace!(
            "Finalized '{}' at distance {}",
            self.graph.label(settled.vertex),
            settled.distance
        );
        Some(settled)
    }

    fn owned_result(&self, candidate: Candidate) -> PathResult<L> {
        PathResult {
            distance: candidate.distance,
            path: candidate
                .path
                .into_iter()
                .map(|p| self.graph.label(p).clone())
                .collect(),
        }
    }

    fn expand(&mut self, settled: &Candidate) {
        self.visited[settled.vertex] = true;

        for &(dest, weight) in self.graph.out_edges(settled.vertex) {
            if self.visited[dest] {
                continue;
            }
            let mut path = settled.path.clone();
            path.push(dest);
            self.frontier.relax(Candidate {
                vertex: dest,
                distance: settled.distance + weight,
                path,
            });
        }
    }
}

impl<'g, L: Label> Iterator for ShortestPaths<'g, L> {
    type Item = Settled<'g, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let settled = self.settle_next()?;
        let graph = self.graph;
        Some(Settled {
            vertex: graph.label(settled.vertex),
            distance: settled.distance,
            path: settled.path.iter().map(|&p| graph.label(p)).collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.iter().filter(|v| !**v).count();
        (self.frontier.entries.len(), Some(remaining))
    }
}

impl<'g, L: Label> std::iter::FusedIterator for ShortestPaths<'g, L> {}

impl<L: Label> WeightedDigraph<L> {
    /// Enumerate shortest paths from `src` lazily, nearest first.
    pub fn shortest_paths<Q>(&self, src: &Q) -> GraphResult<ShortestPaths<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let source = self.position(src)?;
        Ok(ShortestPaths::new(self, source))
    }

    /// Shortest path from `src` to `dest`.
    ///
    /// Returns the path length and the vertices along it. When `dest` cannot
    /// be reached (including when no such vertex exists) the result is
    /// `(f64::INFINITY, vec![])`. Fails only if `src` is unknown.
    pub fn dsp<Q>(&self, src: &Q, dest: &Q) -> GraphResult<(f64, Vec<L>)>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(self.shortest_path(src, dest)?.into_parts())
    }

    /// Like [`dsp`](Self::dsp), returning a serializable [`PathResult`].
    pub fn shortest_path<Q>(&self, src: &Q, dest: &Q) -> GraphResult<PathResult<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let mut search = self.shortest_paths(src)?;
        let Ok(target) = self.position(dest) else {
            return Ok(PathResult::unreachable());
        };

        while let Some(settled) = search.settle_next() {
            if settled.vertex == target {
                return Ok(search.owned_result(settled));
            }
        }
        Ok(PathResult::unreachable())
    }

    /// Shortest path from `src` to every vertex in the graph.
    ///
    /// Every vertex is a key. Unreachable vertices map to an empty path and
    /// `src` maps to `[src]`.
    pub fn dsp_all<Q>(&self, src: &Q) -> GraphResult<HashMap<L, Vec<L>>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(self
            .shortest_path_tree(src)?
            .into_iter()
            .map(|(label, result)| (label, result.path))
            .collect())
    }

    /// Distance and path from `src` to every vertex, in vertex insertion order.
    pub fn shortest_path_tree<Q>(&self, src: &Q) -> GraphResult<Vec<(L, PathResult<L>)>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let mut search = self.shortest_paths(src)?;
        let mut results: Vec<PathResult<L>> = (0..self.vertex_count())
            .map(|_| PathResult::unreachable())
            .collect();

        while let Some(settled) = search.settle_next() {
            let position = settled.vertex;
            results[position] = search.owned_result(settled);
        }

        Ok(self.vertices().cloned().zip(results).collect())
    }
}
