use crate::domain::error::Result;
use crate::domain::graph::Graph;
use crate::domain::model::ShortestPathTree;
use crate::domain::traits::ShortestPathSolver;
use crate::usecase::paths::relax::{relax_from, Relaxation};

/// Dijkstra with a lazily-pruned binary heap.
///
/// Weights must be non-negative. Negative weights are not detected and give
/// unspecified distances; use [`BellmanFordSolver`](super::BellmanFordSolver) instead.
pub struct DijkstraSolver;

impl ShortestPathSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, graph: &Graph, source: usize) -> Result<ShortestPathTree> {
        relax_from(graph, source, Relaxation::PriorityDriven)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_cheaper_detour_over_direct_edge() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 2).unwrap();
        g.add_edge("A", "C", 10).unwrap();
        g.add_edge("B", "D", 1).unwrap();
        g.add_edge("D", "C", 4).unwrap();

        let tree = DijkstraSolver.solve(&g, 0).expect("solve");
        let c = g.index_of("C").unwrap();
        assert_eq!(tree.distance_to(c), Some(7));
        assert_eq!(g.names_of(&tree.path_to(c).unwrap()), ["A", "B", "D", "C"]);
    }
}
