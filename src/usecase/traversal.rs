//! Reachability, component counting and critical-edge search.
//!
//! All traversals use an explicit stack of `(vertex, next edge position)` frames,
//! entering vertices in the same order a recursive DFS would.

use crate::domain::adjacency::Edge;
use crate::domain::error::Result;
use crate::domain::graph::Graph;
use crate::domain::model::CriticalEdge;

/// One logical edge left out of a traversal. For undirected graphs the mirror
/// record is skipped as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExcludedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl ExcludedEdge {
    fn skips(&self, directed: bool, v: usize, e: Edge) -> bool {
        let forward = v == self.from && e.to == self.to && e.weight == self.weight;
        let mirror = !directed && v == self.to && e.to == self.from && e.weight == self.weight;
        forward || mirror
    }
}

/// Visits every vertex reachable from `start`, marking `visited`. Stops early and
/// returns `true` as soon as `target` is entered.
fn dfs(
    graph: &Graph,
    start: usize,
    target: Option<usize>,
    excluded: Option<ExcludedEdge>,
    visited: &mut [bool],
) -> bool {
    if target == Some(start) {
        return true;
    }
    visited[start] = true;

    let directed = graph.is_directed();
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some((v, next_i)) = stack.pop() {
        let edges = graph.edges_from(v);
        if next_i >= edges.len() {
            continue;
        }
        stack.push((v, next_i + 1));

        let e = edges[next_i];
        if excluded.is_some_and(|x| x.skips(directed, v, e)) {
            continue;
        }
        if target == Some(e.to) {
            return true;
        }
        if !visited[e.to] {
            visited[e.to] = true;
            stack.push((e.to, 0));
        }
    }
    false
}

pub(crate) fn reaches(
    graph: &Graph,
    from: usize,
    to: usize,
    excluded: Option<ExcludedEdge>,
) -> bool {
    let mut visited = vec![false; graph.vertex_count()];
    dfs(graph, from, Some(to), excluded, &mut visited)
}

/// True iff `to` is reachable from `from` along stored edges.
pub fn has_path(graph: &Graph, from: &str, to: &str) -> Result<bool> {
    let u = graph.index_of(from)?;
    let v = graph.index_of(to)?;
    Ok(reaches(graph, u, v, None))
}

/// Counts DFS launches from the first unvisited vertex, in index order.
///
/// On directed graphs only stored (outgoing) edges are followed, so the result
/// depends on vertex order and is neither the strong nor the weak component
/// count. `cyclomatic_number` inherits this.
pub fn count_connected_components(graph: &Graph) -> usize {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut count = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        count += 1;
        dfs(graph, start, None, None, &mut visited);
    }
    count
}

/// Edges whose individual removal disconnects `from` from `to`.
///
/// Every edge leaving a vertex reachable from `from` is a candidate; each one is
/// tested with a fresh reachability search. Cost is O(E * (V + E)): meant for
/// small graphs only.
pub fn find_critical_edges(graph: &Graph, from: &str, to: &str) -> Result<Vec<CriticalEdge>> {
    let u = graph.index_of(from)?;
    let v = graph.index_of(to)?;
    Ok(critical_edges(graph, u, v))
}

pub(crate) fn critical_edges(graph: &Graph, u: usize, v: usize) -> Vec<CriticalEdge> {
    if u == v || !reaches(graph, u, v, None) {
        return Vec::new();
    }

    let mut reachable = vec![false; graph.vertex_count()];
    dfs(graph, u, None, None, &mut reachable);

    let directed = graph.is_directed();
    let mut critical = Vec::new();

    for a in (0..reachable.len()).filter(|&a| reachable[a]) {
        for e in graph.edges_from(a) {
            // Self-loops never lie on a simple path; undirected edges are tested once.
            if e.to == a || (!directed && e.to < a) {
                continue;
            }
            let candidate = ExcludedEdge {
                from: a,
                to: e.to,
                weight: e.weight,
            };
            if !reaches(graph, u, v, Some(candidate)) {
                critical.push(CriticalEdge {
                    from: graph.name_at(a).to_string(),
                    to: graph.name_at(e.to).to_string(),
                    weight: e.weight,
                });
            }
        }
    }
    critical
}
