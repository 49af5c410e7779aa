//! GraphViz DOT export.

use std::fmt;

use crate::types::Label;

use super::WeightedDigraph;

/// Indentation in front of each edge statement.
const INDENT: &str = "   ";

impl<L: Label> WeightedDigraph<L> {
    /// Render the graph in GraphViz DOT notation.
    ///
    /// One statement per edge, sources in vertex insertion order and edges
    /// in insertion order within each source:
    ///
    /// ```text
    /// digraph G {
    ///    A -> B [label="2",weight="2"];
    /// }
    /// ```
    ///
    /// Vertices without edges do not appear. Labels are written verbatim.
    pub fn export(&self) -> String {
        self.to_string()
    }
}

impl<L: Label> fmt::Display for WeightedDigraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digraph G {{")?;
        for (src, dest, weight) in self.edges() {
            write!(
                f,
                "\n{INDENT}{src} -> {dest} [label=\"{weight}\",weight=\"{weight}\"];"
            )?;
        }
        writeln!(f, "\n}}")
    }
}
