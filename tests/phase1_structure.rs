//! Phase 1 tests: vertex/edge insertion, weight lookup and export.

use weighted_digraph::fixture::{reference_graph, REFERENCE_EDGES};
use weighted_digraph::{GraphBuilder, GraphError, WeightedDigraph, NO_EDGE};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn abc() -> WeightedDigraph<String> {
    let mut graph = WeightedDigraph::new();
    graph
        .add_vertex("A")
        .unwrap()
        .add_vertex("B")
        .unwrap()
        .add_vertex("C")
        .unwrap();
    graph
}

// ==================== Vertices ====================

#[test]
fn test_new_graph_is_empty() {
    let graph: WeightedDigraph<String> = WeightedDigraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertices().count(), 0);
}

#[test]
fn test_add_vertex_chains() {
    init_logger();
    let graph = abc();
    assert_eq!(graph.vertex_count(), 3);
    let labels: Vec<&String> = graph.vertices().collect();
    assert_eq!(labels, ["A", "B", "C"]);
}

#[test]
fn test_duplicate_vertex_rejected() {
    let mut graph = abc();
    let err = graph.add_vertex("B").unwrap_err();
    assert_eq!(err, GraphError::DuplicateVertex("B".into()));
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_non_string_labels() {
    let mut graph: WeightedDigraph<u32> = WeightedDigraph::new();
    graph.add_vertex(10u32).unwrap().add_vertex(20u32).unwrap();
    graph.add_edge(&10, &20, 1).unwrap();
    assert_eq!(graph.get_weight(&10, &20).unwrap(), 1.0);
    assert_eq!(
        graph.add_vertex(10u32).unwrap_err(),
        GraphError::DuplicateVertex("10".into())
    );
}

// ==================== Edges ====================

#[test]
fn test_add_edge_and_weight_exact() {
    let mut graph = abc();
    graph
        .add_edge("A", "B", 2)
        .unwrap()
        .add_edge("B", "C", 0.1)
        .unwrap()
        .add_edge("C", "A", 1e-9)
        .unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_weight("A", "B").unwrap(), 2.0);
    assert_eq!(graph.get_weight("B", "C").unwrap(), 0.1);
    assert_eq!(graph.get_weight("C", "A").unwrap(), 1e-9);
}

#[test]
fn test_integer_and_float_weight_types() {
    let mut graph = abc();
    graph.add_edge("A", "B", 7u8).unwrap();
    graph.add_edge("B", "C", -3i32).unwrap();
    graph.add_edge("C", "A", 2.5f32).unwrap();
    assert_eq!(graph.get_weight("A", "B").unwrap(), 7.0);
    assert_eq!(graph.get_weight("B", "C").unwrap(), -3.0);
    assert_eq!(graph.get_weight("C", "A").unwrap(), 2.5);
}

#[test]
fn test_missing_edge_is_infinite() {
    let mut graph = abc();
    graph.add_edge("A", "B", 1).unwrap();
    assert_eq!(graph.get_weight("B", "A").unwrap(), f64::INFINITY);
    assert_eq!(graph.get_weight("A", "C").unwrap(), NO_EDGE);
    assert_eq!(graph.get_weight("A", "A").unwrap(), NO_EDGE);
}

#[test]
fn test_get_weight_unknown_vertex() {
    let graph = abc();
    assert_eq!(
        graph.get_weight("X", "A").unwrap_err(),
        GraphError::UnknownVertex("X".into())
    );
    assert_eq!(
        graph.get_weight("A", "Y").unwrap_err(),
        GraphError::UnknownVertex("Y".into())
    );
}

#[test]
fn test_edge_to_unknown_vertex_rejected() {
    let mut graph = abc();
    graph.add_edge("A", "B", 1).unwrap();

    let err = graph.add_edge("A", "Z", 1).unwrap_err();
    assert_eq!(err, GraphError::UnknownVertex("Z".into()));
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains_vertex("Z"));

    let err = graph.add_edge("Z", "A", 1).unwrap_err();
    assert_eq!(err, GraphError::UnknownVertex("Z".into()));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_source_checked_before_destination() {
    let mut graph = abc();
    let err = graph.add_edge("P", "Q", 1).unwrap_err();
    assert_eq!(err, GraphError::UnknownVertex("P".into()));
}

#[test]
fn test_duplicate_edge_rejected() {
    let mut graph = abc();
    graph.add_edge("A", "B", 1).unwrap();
    let err = graph.add_edge("A", "B", 5).unwrap_err();
    assert_eq!(
        err,
        GraphError::DuplicateEdge {
            src: "A".into(),
            dest: "B".into()
        }
    );
    assert_eq!(graph.get_weight("A", "B").unwrap(), 1.0);
    assert_eq!(graph.edge_count(), 1);

    // The reverse direction is a different edge.
    graph.add_edge("B", "A", 5).unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_nan_weight_rejected() {
    let mut graph = abc();
    let err = graph.add_edge("A", "B", f64::NAN).unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { .. }));
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains_edge("A", "B"));
}

#[test]
fn test_self_loop_allowed() {
    let mut graph = abc();
    graph.add_edge("A", "A", 4).unwrap();
    assert_eq!(graph.get_weight("A", "A").unwrap(), 4.0);
}

#[test]
fn test_counts_match_contents() {
    let graph = reference_graph().unwrap();
    assert_eq!(graph.vertex_count(), graph.vertices().count());
    assert_eq!(graph.edge_count(), graph.edges().count());
    assert_eq!(graph.edge_count(), REFERENCE_EDGES.len());
    for (src, dest, weight) in REFERENCE_EDGES {
        assert!(graph.contains_edge(src, dest));
        assert_eq!(graph.get_weight(src, dest).unwrap(), f64::from(weight));
    }
}

#[test]
fn test_neighbors_in_insertion_order() {
    let graph = reference_graph().unwrap();
    let out: Vec<(&String, f64)> = graph.neighbors("B").unwrap().collect();
    let labels: Vec<&str> = out.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, ["C", "D", "F"]);
    assert_eq!(out[1].1, 15.0);
    assert!(graph.neighbors("nope").is_err());
}

// ==================== Builder ====================

#[test]
fn test_builder_matches_direct_construction() {
    let built = GraphBuilder::<String>::new()
        .vertices(["A", "B", "C"])
        .edge("A", "B", 1)
        .edge("B", "C", 2)
        .build()
        .unwrap();

    let mut direct = abc();
    direct.add_edge("A", "B", 1).unwrap().add_edge("B", "C", 2).unwrap();

    assert_eq!(built.export(), direct.export());
}

#[test]
fn test_builder_rejects_duplicates() {
    let err = GraphBuilder::<String>::new()
        .vertex("A")
        .vertex("A")
        .build()
        .unwrap_err();
    assert_eq!(err, GraphError::DuplicateVertex("A".into()));
}

// ==================== Export ====================

#[test]
fn test_export_reference_graph() {
    let graph = reference_graph().unwrap();
    let expected = r#"digraph G {
   A -> B [label="2",weight="2"];
   A -> F [label="9",weight="9"];
   B -> C [label="2",weight="2"];
   B -> D [label="15",weight="15"];
   B -> F [label="6",weight="6"];
   C -> D [label="1",weight="1"];
   E -> D [label="3",weight="3"];
   E -> C [label="7",weight="7"];
   F -> B [label="6",weight="6"];
   F -> E [label="3",weight="3"];
}
"#;
    assert_eq!(graph.export(), expected);
}

#[test]
fn test_export_one_statement_per_edge() {
    let graph = reference_graph().unwrap();
    let out = graph.export();
    let statements: Vec<&str> = out.lines().filter(|l| l.contains("->")).collect();
    assert_eq!(statements.len(), 10);
    for line in statements {
        assert!(line.ends_with("\"];"), "bad statement {line:?}");
    }
    assert_eq!(out, graph.to_string());
}

#[test]
fn test_export_skips_isolated_vertices() {
    let graph = abc();
    assert_eq!(graph.export(), "digraph G {\n}\n");
}
