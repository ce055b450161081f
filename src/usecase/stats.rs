use crate::domain::graph::Graph;
use crate::usecase::traversal::count_connected_components;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub directed: bool,
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
}

impl GraphStats {
    pub fn of(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            components: count_connected_components(graph),
        }
    }
}
