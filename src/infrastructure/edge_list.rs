//! Plain-text edge-list persistence.
//!
//! ```text
//! Directed
//! A B 4
//! B C -1
//! ```
//!
//! The first line names the graph kind; every following non-blank line is one
//! `<from> <to> <weight>` edge. Undirected edges are written once.

use crate::domain::error::GraphError;
use crate::domain::graph::{Graph, GraphKind};
use anyhow::{anyhow, Context, Result};
use std::fmt::Write as _;
use tokio::fs;

/// Where and why edge parsing stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStop {
    pub line: usize,
    pub reason: String,
}

/// A freshly parsed graph plus the diagnostics collected while loading it.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub stopped_at: Option<ParseStop>,
    pub rejected: Vec<GraphError>,
}

fn parse_header(line: Option<&str>) -> Result<GraphKind, GraphError> {
    match line.map(str::trim) {
        Some("Directed") => Ok(GraphKind::Directed),
        Some("Undirected") => Ok(GraphKind::Undirected),
        Some(other) => Err(GraphError::FileFormat {
            line: 1,
            reason: format!("expected Directed or Undirected, found {other:?}"),
        }),
        None => Err(GraphError::FileFormat {
            line: 1,
            reason: "empty input".to_string(),
        }),
    }
}

fn parse_edge(line: &str) -> Result<(&str, &str, i64), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [from, to, weight] = fields.as_slice() else {
        return Err(format!(
            "expected `<from> <to> <weight>`, found {} field(s)",
            fields.len()
        ));
    };
    let weight = weight
        .parse::<i64>()
        .map_err(|e| format!("invalid weight {weight:?}: {e}"))?;
    Ok((*from, *to, weight))
}

/// Parses edge-list text into a new graph.
///
/// Only a bad header is fatal. A malformed edge line stops parsing (edges above
/// it are kept) and duplicate edges are skipped; both are reported in the result.
pub fn parse_edge_list(input: &str) -> Result<LoadedGraph, GraphError> {
    let mut lines = input.lines();
    let kind = parse_header(lines.next())?;

    let mut graph = Graph::new(kind);
    let mut stopped_at = None;
    let mut rejected = Vec::new();

    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;
        if line.trim().is_empty() {
            continue;
        }
        match parse_edge(line) {
            Ok((from, to, weight)) => {
                if let Err(e) = graph.add_edge(from, to, weight) {
                    rejected.push(e);
                }
            }
            Err(reason) => {
                stopped_at = Some(ParseStop {
                    line: line_no,
                    reason,
                });
                break;
            }
        }
    }

    Ok(LoadedGraph {
        graph,
        stopped_at,
        rejected,
    })
}

/// Vertices with no incident edge. The edge-list form has no line for them.
pub fn unrepresentable_vertices(graph: &Graph) -> Vec<String> {
    let mut touched = vec![false; graph.vertex_count()];
    for (u, outs) in graph.store().lists().iter().enumerate() {
        for e in outs {
            touched[u] = true;
            touched[e.to] = true;
        }
    }
    graph
        .vertex_names()
        .iter()
        .zip(touched)
        .filter(|(_, t)| !t)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Renders a graph in edge-list form. Isolated vertices are not representable
/// and are dropped; [`write_graph_file`] refuses such graphs.
pub fn render_edge_list(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str(graph.kind().header());
    out.push('\n');
    for (from, to, weight) in graph.edge_triples() {
        let _ = writeln!(out, "{from} {to} {weight}");
    }
    out
}

pub async fn read_graph_file(path: &str) -> Result<LoadedGraph> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading graph file {path}"))?;
    let loaded = parse_edge_list(&raw).with_context(|| format!("parsing graph file {path}"))?;
    Ok(loaded)
}

/// Writes `graph` to `path`. Fails without touching the file when some vertex
/// has no edge and would be lost.
pub async fn write_graph_file(path: &str, graph: &Graph) -> Result<()> {
    let isolated = unrepresentable_vertices(graph);
    if !isolated.is_empty() {
        return Err(anyhow!(
            "cannot write {path}: vertices without edges are not representable in the edge-list format: {}",
            isolated.join(", ")
        ));
    }
    fs::write(path, render_edge_list(graph))
        .await
        .with_context(|| format!("writing graph file {path}"))?;
    Ok(())
}
