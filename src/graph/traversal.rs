//! Graph traversal algorithms (DFS / BFS).

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt::Display;
use std::hash::Hash;

use crate::types::{GraphResult, Label};

use super::WeightedDigraph;

/// Which end of the discovery list the next vertex is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Take the most recently discovered vertex (stack).
    DepthFirst,
    /// Take the earliest discovered vertex (queue).
    BreadthFirst,
}

/// Lazy walk over the vertices reachable from a start vertex.
///
/// Created by [`WeightedDigraph::dfs`] and [`WeightedDigraph::bfs`]. The
/// start vertex is yielded first. On every later step the current vertex
/// is marked visited, each outgoing neighbor that has been neither visited
/// nor discovered is appended to the discovery list (edge insertion order),
/// and the next vertex is taken from the back (DFS) or the front (BFS) of
/// that list.
///
/// The walk ends once all but one vertex have been visited, or when nothing
/// is left to discover. Vertices unreachable from the start are never
/// yielded. The iterator borrows the graph, so the graph cannot change
/// while a walk is in progress.
pub struct Traversal<'g, L> {
    graph: &'g WeightedDigraph<L>,
    order: TraversalOrder,
    /// Vertex to yield or expand next.
    current: usize,
    /// Vertices visited or sitting in `found`, by position.
    seen: Vec<bool>,
    visited_count: usize,
    /// Discovered but not yet yielded.
    found: VecDeque<usize>,
    started: bool,
    finished: bool,
}

impl<'g, L: Label> Traversal<'g, L> {
    fn new(graph: &'g WeightedDigraph<L>, start: usize, order: TraversalOrder) -> Self {
        Self {
            graph,
            order,
            current: start,
            seen: vec![false; graph.vertex_count()],
            visited_count: 0,
            found: VecDeque::new(),
            started: false,
            finished: false,
        }
    }

    /// The discipline this walk follows.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    fn advance(&mut self) -> Option<usize> {
        if self.visited_count + 1 >= self.graph.vertex_count() {
            return None;
        }

        self.seen[self.current] = true;
        self.visited_count += 1;

        let out = self.graph.out_edges(self.current);
        if out.is_empty() && self.found.is_empty() {
            return None;
        }

        for &(dest, _) in out {
            if !self.seen[dest] {
                self.seen[dest] = true;
                self.found.push_back(dest);
            }
        }

        match self.order {
            TraversalOrder::DepthFirst => self.found.pop_back(),
            TraversalOrder::BreadthFirst => self.found.pop_front(),
        }
    }
}

impl<'g, L: Label> Iterator for Traversal<'g, L> {
    type Item = &'g L;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.graph.label(self.current));
        }

        match self.advance() {
            Some(next) => {
                log::trace!(
                    "{:?} step: '{}' -> '{}'",
                    self.order,
                    self.graph.label(self.current),
                    self.graph.label(next)
                );
                self.current = next;
                Some(self.graph.label(next))
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let lower = usize::from(!self.started);
        let upper = self
            .graph
            .vertex_count()
            .saturating_sub(self.visited_count + usize::from(self.started));
        (lower, Some(upper.max(lower)))
    }
}

impl<'g, L: Label> std::iter::FusedIterator for Traversal<'g, L> {}

impl<L: Label> WeightedDigraph<L> {
    /// Depth-first walk from `start`.
    pub fn dfs<Q>(&self, start: &Q) -> GraphResult<Traversal<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.traverse(start, TraversalOrder::DepthFirst)
    }

    /// Breadth-first walk from `start`.
    pub fn bfs<Q>(&self, start: &Q) -> GraphResult<Traversal<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.traverse(start, TraversalOrder::BreadthFirst)
    }

    /// Walk from `start` with an explicit discipline.
    pub fn traverse<Q>(&self, start: &Q, order: TraversalOrder) -> GraphResult<Traversal<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let start = self.position(start)?;
        Ok(Traversal::new(self, start, order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> WeightedDigraph<usize> {
        let mut graph = WeightedDigraph::new();
        for i in 0..n {
            graph.add_vertex(i).unwrap();
        }
        for i in 1..n {
            graph.add_edge(&(i - 1), &i, 1).unwrap();
        }
        graph
    }

    #[test]
    fn size_hint_bounds_the_walk() {
        let graph = chain(4);
        let mut walk = graph.dfs(&0usize).unwrap();
        assert_eq!(walk.size_hint(), (1, Some(4)));
        walk.next();
        assert_eq!(walk.size_hint().1, Some(3));
        assert_eq!(walk.count(), 3);
    }

    #[test]
    fn exhausted_walk_stays_exhausted() {
        let graph = chain(2);
        let mut walk = graph.bfs(&0usize).unwrap();
        assert_eq!(walk.next(), Some(&0));
        assert_eq!(walk.next(), Some(&1));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn stops_when_discovery_runs_dry() {
        // 0 <-> 1 with two isolated vertices: after 0 and 1 nothing new is found.
        let mut graph = chain(2);
        graph.add_vertex(2usize).unwrap().add_vertex(3usize).unwrap();
        graph.add_edge(&1usize, &0usize, 1).unwrap();
        let order: Vec<_> = graph.dfs(&0usize).unwrap().copied().collect();
        assert_eq!(order, vec![0, 1]);
    }
}
