use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Graph;
use crate::domain::model::WeightedPath;
use crate::usecase::paths::relax::{combine, UNREACHABLE};

/// All-pairs shortest distances with a next-hop matrix for path reconstruction
/// (Floyd-Warshall). O(V^3) time, O(V^2) memory.
#[derive(Debug, Clone)]
pub struct AllPairs {
    dist: Vec<Vec<i64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl AllPairs {
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![vec![UNREACHABLE; n]; n];
        let mut next = vec![vec![None; n]; n];

        for i in 0..n {
            dist[i][i] = 0;
            next[i][i] = Some(i);
            // Parallel records keep the cheapest; a positive self-loop never beats 0.
            for e in graph.edges_from(i) {
                if e.weight < dist[i][e.to] {
                    dist[i][e.to] = e.weight;
                    next[i][e.to] = Some(e.to);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if dist[i][k] == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let through_k = combine(dist[i][k], dist[k][j]);
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        Self { dist, next }
    }

    pub fn distance(&self, from: usize, to: usize) -> Option<i64> {
        let d = self.dist[from][to];
        (d != UNREACHABLE).then_some(d)
    }

    /// True if some negative cycle can be entered on the way from `from` to `to`.
    fn crosses_negative_cycle(&self, from: usize, to: usize) -> bool {
        (0..self.dist.len()).any(|k| {
            self.dist[k][k] < 0
                && self.dist[from][k] != UNREACHABLE
                && self.dist[k][to] != UNREACHABLE
        })
    }

    fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next[current][to]?;
            path.push(current);
            if path.len() > self.dist.len() {
                return None;
            }
        }
        Some(path)
    }

    /// Shortest path from `from` to `to` if its length is at most `bound`.
    pub(crate) fn path_within(
        &self,
        from: usize,
        to: usize,
        bound: i64,
    ) -> Result<Option<(Vec<usize>, i64)>> {
        if self.crosses_negative_cycle(from, to) {
            return Err(GraphError::NegativeCycleDetected);
        }
        match self.distance(from, to) {
            Some(length) if length <= bound => self
                .path(from, to)
                .map(|p| Some((p, length)))
                .ok_or(GraphError::NegativeCycleDetected),
            _ => Ok(None),
        }
    }
}

/// Shortest path between two named vertices whose length does not exceed `bound`.
pub fn find_path_within(graph: &Graph, from: &str, to: &str, bound: i64) -> Result<WeightedPath> {
    let u = graph.index_of(from)?;
    let v = graph.index_of(to)?;

    let table = AllPairs::compute(graph);
    let Some((path, length)) = table.path_within(u, v, bound)? else {
        return Err(GraphError::NoPathWithinBound {
            from: from.to_string(),
            to: to.to_string(),
            bound,
        });
    };
    Ok(WeightedPath {
        vertices: graph.names_of(&path),
        length,
    })
}
