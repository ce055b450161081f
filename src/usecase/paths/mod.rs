mod all_pairs;
mod bellman_ford;
mod dijkstra;
mod relax;

pub use all_pairs::{find_path_within, AllPairs};
pub use bellman_ford::BellmanFordSolver;
pub use dijkstra::DijkstraSolver;
pub use relax::Relaxation;

use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Graph;
use crate::domain::model::{ShortestPathTree, WeightedPath};
use crate::domain::traits::ShortestPathSolver;

/// Single-source distances from a named vertex.
pub fn distances_from(
    graph: &Graph,
    source: &str,
    solver: &dyn ShortestPathSolver,
) -> Result<ShortestPathTree> {
    let s = graph.index_of(source)?;
    solver.solve(graph, s)
}

/// Shortest path between two named vertices using `solver`.
pub fn shortest_path(
    graph: &Graph,
    from: &str,
    to: &str,
    solver: &dyn ShortestPathSolver,
) -> Result<WeightedPath> {
    let u = graph.index_of(from)?;
    let v = graph.index_of(to)?;

    let tree = solver.solve(graph, u)?;
    let unreachable = || GraphError::VertexUnreachable {
        from: from.to_string(),
        to: to.to_string(),
    };
    let length = tree.distance_to(v).ok_or_else(unreachable)?;
    let path = tree.path_to(v).ok_or_else(unreachable)?;

    Ok(WeightedPath {
        vertices: graph.names_of(&path),
        length,
    })
}

/// Vertices from which every other vertex is reachable with distance at most `bound`.
///
/// Runs Bellman-Ford from every vertex; a negative cycle reachable from any of
/// them fails the whole query.
pub fn vertices_with_paths_below(graph: &Graph, bound: i64) -> Result<Vec<String>> {
    let n = graph.vertex_count();
    let mut qualifying = Vec::new();

    for u in 0..n {
        let tree = BellmanFordSolver.solve(graph, u)?;
        let all_within = (0..n)
            .filter(|&v| v != u)
            .all(|v| tree.distance_to(v).is_some_and(|d| d <= bound));
        if all_within {
            qualifying.push(graph.name_at(u).to_string());
        }
    }
    Ok(qualifying)
}
