use crate::domain::error::Result;
use crate::domain::graph::{Graph, VertexId};
use crate::domain::model::ShortestPathTree;

/// Outgoing edge as seen through [`GraphView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub target: VertexId,
    pub weight: i64,
}

/// Read-only capability handed to renderers and menus. Never exposes storage.
pub trait GraphView {
    fn is_directed(&self) -> bool;
    fn vertex_count(&self) -> usize;
    fn vertex_ids(&self) -> Vec<VertexId>;
    fn vertex_name(&self, id: VertexId) -> Result<&str>;
    fn adjacency(&self, id: VertexId) -> Result<Vec<Neighbor>>;
}

/// Single-source shortest paths over the whole graph.
pub trait ShortestPathSolver {
    fn name(&self) -> &'static str;
    fn solve(&self, graph: &Graph, source: usize) -> Result<ShortestPathTree>;
}
