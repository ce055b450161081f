//! One engine operation per query, bracketed by progress events.

use crate::domain::error::GraphError;
use crate::domain::graph::Graph;
use crate::domain::model::{CriticalEdge, DisconnectionVerdict, SpanningTree, WeightedPath};
use crate::domain::traits::ShortestPathSolver;
use crate::infrastructure::edge_list::LoadedGraph;
use crate::usecase::connectivity::{can_disconnect_with_k_edges, cyclomatic_number, find_common_target};
use crate::usecase::event::{emit, AppEvent};
use crate::usecase::max_flow::max_flow;
use crate::usecase::mst::minimum_spanning_tree;
use crate::usecase::paths::{
    find_path_within, shortest_path, vertices_with_paths_below, BellmanFordSolver, DijkstraSolver,
};
use crate::usecase::stats::GraphStats;
use crate::usecase::traversal::{count_connected_components, find_critical_edges, has_path};
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathAlgorithm {
    #[default]
    Dijkstra,
    BellmanFord,
}

impl PathAlgorithm {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dijkstra" => Some(PathAlgorithm::Dijkstra),
            "bellman-ford" => Some(PathAlgorithm::BellmanFord),
            _ => None,
        }
    }

    fn solver(self) -> &'static dyn ShortestPathSolver {
        match self {
            PathAlgorithm::Dijkstra => &DijkstraSolver,
            PathAlgorithm::BellmanFord => &BellmanFordSolver,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    AddVertex { name: String },
    RemoveVertex { name: String },
    AddEdge { from: String, to: String, weight: i64 },
    RemoveEdge { from: String, to: String },
    /// Replaces the graph with its transpose.
    Reverse,

    HasPath { from: String, to: String },
    ShortestPath { from: String, to: String, algorithm: PathAlgorithm },
    PathWithin { from: String, to: String, bound: i64 },
    VerticesBelow { bound: i64 },
    SpanningTree,
    MaxFlow { from: String, to: String },
    Components,
    Cyclomatic,
    CriticalEdges { from: String, to: String },
    CommonTarget { from: String, to: String },
    Disconnect { from: String, to: String, k: usize },
    OutDegree { name: String },
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::AddVertex { .. } => "add-vertex",
            Query::RemoveVertex { .. } => "remove-vertex",
            Query::AddEdge { .. } => "add-edge",
            Query::RemoveEdge { .. } => "remove-edge",
            Query::Reverse => "reverse",
            Query::HasPath { .. } => "has-path",
            Query::ShortestPath { .. } => "path",
            Query::PathWithin { .. } => "path-within",
            Query::VerticesBelow { .. } => "below",
            Query::SpanningTree => "mst",
            Query::MaxFlow { .. } => "max-flow",
            Query::Components => "components",
            Query::Cyclomatic => "cyclomatic",
            Query::CriticalEdges { .. } => "critical-edges",
            Query::CommonTarget { .. } => "common-target",
            Query::Disconnect { .. } => "disconnect",
            Query::OutDegree { .. } => "out-degree",
        }
    }

    /// Whether the query changes the graph (and so needs somewhere to write it).
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Query::AddVertex { .. }
                | Query::RemoveVertex { .. }
                | Query::AddEdge { .. }
                | Query::RemoveEdge { .. }
                | Query::Reverse
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    Mutated { vertices: usize, edges: usize },
    Reachable { reachable: bool },
    Path(WeightedPath),
    Vertices { names: Vec<String> },
    Tree(SpanningTree),
    Flow { value: i64 },
    Count { value: i64 },
    CriticalEdges { edges: Vec<CriticalEdge> },
    CommonTarget { vertex: Option<String> },
    Disconnection(DisconnectionVerdict),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Mutated { vertices, edges } => {
                write!(f, "graph now has {vertices} vertices and {edges} edges")
            }
            QueryOutcome::Reachable { reachable } => write!(f, "reachable: {reachable}"),
            QueryOutcome::Path(p) => {
                write!(f, "path: {} (length {})", p.vertices.join(" -> "), p.length)
            }
            QueryOutcome::Vertices { names } if names.is_empty() => f.write_str("vertices: none"),
            QueryOutcome::Vertices { names } => write!(f, "vertices: {}", names.join(" ")),
            QueryOutcome::Tree(tree) => {
                for e in &tree.edges {
                    writeln!(f, "{} - {} (weight {})", e.parent, e.child, e.weight)?;
                }
                write!(f, "total weight: {}", tree.total_weight)
            }
            QueryOutcome::Flow { value } => write!(f, "max flow: {value}"),
            QueryOutcome::Count { value } => write!(f, "{value}"),
            QueryOutcome::CriticalEdges { edges } if edges.is_empty() => {
                f.write_str("critical edges: none")
            }
            QueryOutcome::CriticalEdges { edges } => {
                f.write_str("critical edges:")?;
                for e in edges {
                    write!(f, " ({}, {}, {})", e.from, e.to, e.weight)?;
                }
                Ok(())
            }
            QueryOutcome::CommonTarget { vertex: Some(v) } => write!(f, "common target: {v}"),
            QueryOutcome::CommonTarget { vertex: None } => f.write_str("common target: none"),
            QueryOutcome::Disconnection(v) => {
                let cut = v
                    .min_cut
                    .map_or_else(|| "impossible".to_string(), |c| c.to_string());
                write!(f, "can disconnect: {} (min cut: {cut})", v.feasible)
            }
        }
    }
}

/// Publishes load diagnostics and hands back the freshly parsed graph.
pub async fn ingest(loaded: LoadedGraph, sink: &Option<mpsc::Sender<AppEvent>>) -> Graph {
    for rejected in loaded.rejected.iter() {
        emit(sink, rejected_event("load", rejected)).await;
    }
    if let Some(stop) = loaded.stopped_at.as_ref() {
        emit(
            sink,
            AppEvent::ParseStopped {
                line: stop.line,
                reason: stop.reason.clone(),
            },
        )
        .await;
    }
    emit(
        sink,
        AppEvent::GraphLoaded {
            stats: GraphStats::of(&loaded.graph),
        },
    )
    .await;
    loaded.graph
}

/// Runs one query against `graph`. Rejections are reported as events before the
/// error is returned; the graph is left unchanged in that case.
pub async fn run_query(
    graph: &mut Graph,
    query: Query,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<QueryOutcome> {
    let operation = query.name();
    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: operation.into(),
        },
    )
    .await;

    let outcome = match answer(graph, &query) {
        Ok(outcome) => outcome,
        Err(e) => {
            emit(&sink, rejected_event(operation, &e)).await;
            return Err(anyhow::Error::new(e).context(format!("{operation} rejected")));
        }
    };

    emit(
        &sink,
        AppEvent::QueryAnswered {
            operation: operation.into(),
            outcome: outcome.clone(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: operation.into(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::Finished {
            stats: GraphStats::of(graph),
        },
    )
    .await;
    Ok(outcome)
}

fn rejected_event(operation: &str, e: &GraphError) -> AppEvent {
    AppEvent::Rejected {
        operation: operation.to_string(),
        kind: e.kind().to_string(),
        message: e.to_string(),
    }
}

fn answer(graph: &mut Graph, query: &Query) -> Result<QueryOutcome, GraphError> {
    let outcome = match query {
        Query::AddVertex { name } => {
            graph.add_vertex(name);
            mutated(graph)
        }
        Query::RemoveVertex { name } => {
            graph.remove_vertex(name)?;
            mutated(graph)
        }
        Query::AddEdge { from, to, weight } => {
            graph.add_edge(from, to, *weight)?;
            mutated(graph)
        }
        Query::RemoveEdge { from, to } => {
            graph.remove_edge(from, to)?;
            mutated(graph)
        }
        Query::Reverse => {
            *graph = graph.reverse()?;
            mutated(graph)
        }
        Query::HasPath { from, to } => QueryOutcome::Reachable {
            reachable: has_path(graph, from, to)?,
        },
        Query::ShortestPath { from, to, algorithm } => {
            QueryOutcome::Path(shortest_path(graph, from, to, algorithm.solver())?)
        }
        Query::PathWithin { from, to, bound } => {
            QueryOutcome::Path(find_path_within(graph, from, to, *bound)?)
        }
        Query::VerticesBelow { bound } => QueryOutcome::Vertices {
            names: vertices_with_paths_below(graph, *bound)?,
        },
        Query::SpanningTree => QueryOutcome::Tree(minimum_spanning_tree(graph)?),
        Query::MaxFlow { from, to } => QueryOutcome::Flow {
            value: max_flow(graph, from, to)?,
        },
        Query::Components => QueryOutcome::Count {
            value: count_connected_components(graph) as i64,
        },
        Query::Cyclomatic => QueryOutcome::Count {
            value: cyclomatic_number(graph),
        },
        Query::CriticalEdges { from, to } => QueryOutcome::CriticalEdges {
            edges: find_critical_edges(graph, from, to)?,
        },
        Query::CommonTarget { from, to } => QueryOutcome::CommonTarget {
            vertex: find_common_target(graph, from, to)?,
        },
        Query::Disconnect { from, to, k } => {
            QueryOutcome::Disconnection(can_disconnect_with_k_edges(graph, from, to, *k)?)
        }
        Query::OutDegree { name } => QueryOutcome::Count {
            value: graph.out_degree(name)? as i64,
        },
    };
    Ok(outcome)
}

fn mutated(graph: &Graph) -> QueryOutcome {
    QueryOutcome::Mutated {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
    }
}
