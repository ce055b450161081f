//! Error types for graph operations.

use crate::domain::graph::GraphKind;
use thiserror::Error;

/// Errors reported by graph mutations and algorithms.
///
/// Every variant is recoverable: the graph's invariants hold after any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Referenced vertex name is not registered.
    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    /// An identical (endpoints, weight) edge already exists.
    #[error("duplicate edge rejected: {from} -> {to} (weight {weight})")]
    DuplicateEdgeRejected {
        from: String,
        to: String,
        weight: i64,
    },

    /// No edge between the two vertices.
    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    /// A negative cycle is reachable; no shortest-path result exists.
    #[error("negative cycle detected")]
    NegativeCycleDetected,

    /// Target cannot be reached from the source.
    #[error("{to} is unreachable from {from}")]
    VertexUnreachable { from: String, to: String },

    /// Shortest path exists but is longer than the bound, or no path exists at all.
    #[error("no path from {from} to {to} within length {bound}")]
    NoPathWithinBound { from: String, to: String, bound: i64 },

    /// Operation is not defined for this kind of graph.
    #[error("{operation} is not supported on {kind} graphs")]
    UnsupportedForGraphKind {
        operation: &'static str,
        kind: GraphKind,
    },

    /// Operation requires non-negative weights.
    #[error("{operation} requires non-negative weights: {from} -> {to} has weight {weight}")]
    NegativeWeight {
        operation: &'static str,
        from: String,
        to: String,
        weight: i64,
    },

    /// Vertex handle predates a vertex removal.
    #[error("stale vertex handle: index {index} from generation {generation}")]
    StaleVertexHandle { index: usize, generation: u64 },

    /// Malformed serialized graph.
    #[error("file format error at line {line}: {reason}")]
    FileFormat { line: usize, reason: String },
}

impl GraphError {
    /// Stable machine-readable kind, used in diagnostic events.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::DuplicateEdgeRejected { .. } => "duplicate_edge_rejected",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::NegativeCycleDetected => "negative_cycle_detected",
            GraphError::VertexUnreachable { .. } => "vertex_unreachable",
            GraphError::NoPathWithinBound { .. } => "no_path_within_bound",
            GraphError::UnsupportedForGraphKind { .. } => "unsupported_for_graph_kind",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::StaleVertexHandle { .. } => "stale_vertex_handle",
            GraphError::FileFormat { .. } => "file_format_error",
        }
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
