use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Graph;
use std::collections::VecDeque;

/// Maximum flow from `source` to `sink`, edge weights taken as capacities.
///
/// Edmonds-Karp over a dense V x V residual matrix. Parallel edges add their
/// capacities; undirected edges carry capacity both ways.
pub fn max_flow(graph: &Graph, source: &str, sink: &str) -> Result<i64> {
    let s = graph.index_of(source)?;
    let t = graph.index_of(sink)?;

    let n = graph.vertex_count();
    let mut residual = vec![vec![0i64; n]; n];
    for (u, outs) in graph.store().lists().iter().enumerate() {
        for e in outs {
            if e.weight < 0 {
                return Err(GraphError::NegativeWeight {
                    operation: "max flow",
                    from: graph.name_at(u).to_string(),
                    to: graph.name_at(e.to).to_string(),
                    weight: e.weight,
                });
            }
            residual[u][e.to] = residual[u][e.to].saturating_add(e.weight);
        }
    }

    Ok(augment_all(&mut residual, s, t))
}

/// Fewest edges whose removal disconnects `s` from `t`: max flow with every
/// stored record at capacity 1.
pub(crate) fn unit_capacity_min_cut(graph: &Graph, s: usize, t: usize) -> usize {
    let n = graph.vertex_count();
    let mut residual = vec![vec![0i64; n]; n];
    for (u, outs) in graph.store().lists().iter().enumerate() {
        for e in outs {
            residual[u][e.to] += 1;
        }
    }
    augment_all(&mut residual, s, t) as usize
}

/// Repeats BFS augmenting paths until none is left; returns the total pushed.
fn augment_all(residual: &mut [Vec<i64>], s: usize, t: usize) -> i64 {
    if s == t {
        return 0;
    }

    let n = residual.len();
    let mut parent = vec![usize::MAX; n];
    let mut total = 0i64;

    while bfs(residual, s, t, &mut parent) {
        let mut bottleneck = i64::MAX;
        let mut v = t;
        while v != s {
            let u = parent[v];
            bottleneck = bottleneck.min(residual[u][v]);
            v = u;
        }

        let mut v = t;
        while v != s {
            let u = parent[v];
            residual[u][v] -= bottleneck;
            residual[v][u] = residual[v][u].saturating_add(bottleneck);
            v = u;
        }

        total = total.saturating_add(bottleneck);
    }
    total
}

fn bfs(residual: &[Vec<i64>], s: usize, t: usize, parent: &mut [usize]) -> bool {
    let n = residual.len();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([s]);
    visited[s] = true;

    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if visited[v] || residual[u][v] <= 0 {
                continue;
            }
            parent[v] = u;
            if v == t {
                return true;
            }
            visited[v] = true;
            queue.push_back(v);
        }
    }
    false
}
