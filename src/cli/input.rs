//! Turning command-line arguments into a graph.

use std::str::FromStr;

use crate::fixture;
use crate::graph::WeightedDigraph;
use crate::types::GraphResult;

/// One `--edge SRC:DEST:WEIGHT` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub src: String,
    pub dest: String,
    pub weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split from the right so the weight is always the last field.
        let mut parts = s.rsplitn(3, ':');
        let (Some(weight), Some(dest), Some(src)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected SRC:DEST:WEIGHT, got {:?}", s));
        };
        if src.is_empty() || dest.is_empty() {
            return Err(format!("empty vertex label in {:?}", s));
        }
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| format!("invalid weight {:?} in {:?}", weight, s))?;
        Ok(Self {
            src: src.to_string(),
            dest: dest.to_string(),
            weight,
        })
    }
}

/// Value parser for clap.
pub fn parse_edge(s: &str) -> Result<EdgeSpec, String> {
    s.parse()
}

/// Graph described by the command line.
#[derive(Debug, Clone, Default)]
pub struct GraphInput {
    /// Start from the reference graph.
    pub demo: bool,
    /// Extra vertices, added in order.
    pub vertices: Vec<String>,
    /// Extra edges, added in order after every vertex.
    pub edges: Vec<EdgeSpec>,
}

impl GraphInput {
    /// Build the described graph.
    ///
    /// With `demo` set the reference graph is built first and the extra
    /// vertices and edges are added on top of it.
    pub fn build(&self) -> GraphResult<WeightedDigraph<String>> {
        let mut graph = if self.demo {
            fixture::reference_graph()?
        } else {
            WeightedDigraph::new()
        };

        for label in &self.vertices {
            graph.add_vertex(label.as_str())?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.src.as_str(), edge.dest.as_str(), edge.weight)?;
        }
        Ok(graph)
    }
}
