use crate::domain::error::Result;
use crate::domain::graph::Graph;
use crate::domain::model::ShortestPathTree;
use crate::domain::traits::ShortestPathSolver;
use crate::usecase::paths::relax::{relax_from, Relaxation};

/// Bellman-Ford: `|V| - 1` relaxation passes plus one detection pass.
///
/// Fails with `NegativeCycleDetected` when a negative cycle is reachable from the
/// source, whether or not it lies on the way to any particular target.
pub struct BellmanFordSolver;

impl ShortestPathSolver for BellmanFordSolver {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn solve(&self, graph: &Graph, source: usize) -> Result<ShortestPathTree> {
        let passes = graph.vertex_count().saturating_sub(1);
        relax_from(graph, source, Relaxation::FixedPasses(passes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::GraphError;

    #[test]
    fn negative_cycle_reachable_from_source_aborts() {
        let mut g = Graph::directed();
        g.add_edge("S", "A", 1).unwrap();
        g.add_edge("A", "B", -2).unwrap();
        g.add_edge("B", "A", 1).unwrap();
        g.add_edge("S", "T", 5).unwrap();

        assert_eq!(
            BellmanFordSolver.solve(&g, 0),
            Err(GraphError::NegativeCycleDetected)
        );
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let mut g = Graph::directed();
        g.add_edge("S", "T", 5).unwrap();
        g.add_edge("A", "B", -2).unwrap();
        g.add_edge("B", "A", 1).unwrap();

        let tree = BellmanFordSolver.solve(&g, 0).expect("solve");
        assert_eq!(tree.distance_to(1), Some(5));
        assert_eq!(tree.distance_to(2), None);
    }

    #[test]
    fn undirected_negative_edge_is_a_cycle() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", -1).unwrap();
        assert_eq!(
            BellmanFordSolver.solve(&g, 0),
            Err(GraphError::NegativeCycleDetected)
        );
    }
}
