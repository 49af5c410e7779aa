//! CLI command implementations.
//!
//! Every command renders its output to a `String`; the binary prints it.

use crate::graph::{TraversalOrder, WeightedDigraph};
use crate::types::{GraphResult, PathResult};

/// `<A, B, C>` rendering used for paths in text output.
fn format_path(path: &[String]) -> String {
    format!("<{}>", path.join(", "))
}

fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "unreachable".to_string()
    } else {
        distance.to_string()
    }
}

fn concat(labels: &[&String]) -> String {
    labels.iter().map(|l| l.as_str()).collect()
}

fn to_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Vertex and edge counts.
pub fn cmd_info(graph: &WeightedDigraph<String>, json: bool) -> GraphResult<String> {
    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "labels": graph.vertices().collect::<Vec<_>>(),
        });
        return Ok(to_json(&info));
    }

    let mut out = String::new();
    out.push_str(&format!("Vertices: {}\n", graph.vertex_count()));
    out.push_str(&format!("Edges: {}\n", graph.edge_count()));
    for label in graph.vertices() {
        let degree = graph.neighbors(label.as_str())?.count();
        out.push_str(&format!("  {} (out-degree {})\n", label, degree));
    }
    Ok(out)
}

/// DOT export.
pub fn cmd_export(graph: &WeightedDigraph<String>, json: bool) -> GraphResult<String> {
    if json {
        let edges: Vec<serde_json::Value> = graph
            .edges()
            .map(|(src, dest, weight)| {
                serde_json::json!({"src": src, "dest": dest, "weight": weight})
            })
            .collect();
        return Ok(to_json(&serde_json::json!({
            "vertices": graph.vertices().collect::<Vec<_>>(),
            "edges": edges,
        })));
    }
    Ok(graph.export())
}

/// DFS or BFS order from `start`.
pub fn cmd_walk(
    graph: &WeightedDigraph<String>,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<String> {
    let visited: Vec<&String> = graph.traverse(start, order)?.collect();
    if json {
        return Ok(to_json(&serde_json::json!(visited)));
    }
    let labels: Vec<&str> = visited.iter().map(|l| l.as_str()).collect();
    Ok(format!("{}\n", labels.join(" ")))
}

/// Shortest path between two vertices.
pub fn cmd_path(
    graph: &WeightedDigraph<String>,
    src: &str,
    dest: &str,
    json: bool,
) -> GraphResult<String> {
    let result = graph.shortest_path(src, dest)?;
    if json {
        return Ok(to_json(&serde_json::json!(result)));
    }
    Ok(format!(
        "{} {}\n",
        format_distance(result.distance),
        format_path(&result.path)
    ))
}

/// Shortest paths from `src` to every vertex.
pub fn cmd_paths(graph: &WeightedDigraph<String>, src: &str, json: bool) -> GraphResult<String> {
    let tree = graph.shortest_path_tree(src)?;
    if json {
        let map: serde_json::Map<String, serde_json::Value> = tree
            .into_iter()
            .map(|(label, result)| (label, serde_json::json!(result)))
            .collect();
        return Ok(to_json(&serde_json::Value::Object(map)));
    }

    let mut out = String::new();
    for (label, result) in &tree {
        out.push_str(&format!(
            "{}: {} {}\n",
            label,
            format_distance(result.distance),
            format_path(&result.path)
        ));
    }
    Ok(out)
}

/// Weight of a single edge.
pub fn cmd_weight(
    graph: &WeightedDigraph<String>,
    src: &str,
    dest: &str,
    json: bool,
) -> GraphResult<String> {
    let weight = graph.get_weight(src, dest)?;
    if json {
        return Ok(to_json(&serde_json::json!({
            "src": src,
            "dest": dest,
            "weight": weight.is_finite().then_some(weight),
        })));
    }
    if weight.is_infinite() {
        Ok(format!("no edge {} -> {}\n", src, dest))
    } else {
        Ok(format!("{}\n", weight))
    }
}

/// The five-part report over a graph: DOT export, DFS and BFS from `src`,
/// the shortest path `src -> dest`, and every shortest path from `src`.
pub fn cmd_demo(
    graph: &WeightedDigraph<String>,
    src: &str,
    dest: &str,
    json: bool,
) -> GraphResult<String> {
    let dfs: Vec<&String> = graph.dfs(src)?.collect();
    let bfs: Vec<&String> = graph.bfs(src)?.collect();
    let path: PathResult<String> = graph.shortest_path(src, dest)?;
    let tree = graph.shortest_path_tree(src)?;

    if json {
        let paths: serde_json::Map<String, serde_json::Value> = tree
            .into_iter()
            .map(|(label, result)| (label, serde_json::json!(result.path)))
            .collect();
        return Ok(to_json(&serde_json::json!({
            "export": graph.export(),
            "dfs": dfs,
            "bfs": bfs,
            "path": path,
            "paths": paths,
        })));
    }

    let mut out = String::new();
    out.push_str(&graph.export());
    out.push('\n');
    out.push_str(&format!("{}\n\n", concat(&dfs)));
    out.push_str(&format!("{}\n\n", concat(&bfs)));
    out.push_str(&format!("{}\n\n", format_path(&path.path)));
    for (_, result) in &tree {
        out.push_str(&format!("{}\n", format_path(&result.path)));
    }
    Ok(out)
}
