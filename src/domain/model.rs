use serde::Serialize;

/// Distances and predecessors from one source. `None` distance means unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub source: usize,
    pub distance: Vec<Option<i64>>,
    pub predecessor: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn distance_to(&self, target: usize) -> Option<i64> {
        self.distance.get(target).copied().flatten()
    }

    /// Walks predecessors back from `target`. `None` if unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_to(target)?;
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor[current]?;
            path.push(current);
            if path.len() > self.distance.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedPath {
    pub vertices: Vec<String>,
    pub length: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub parent: String,
    pub child: String,
    pub weight: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<TreeEdge>,
    pub total_weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CriticalEdge {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

/// Answer to "can u be cut off from v by removing at most k edges".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisconnectionVerdict {
    pub feasible: bool,
    pub already_disconnected: bool,
    /// Fewest edges whose removal disconnects the pair; `None` when the pair is a
    /// single vertex and can never be disconnected.
    pub min_cut: Option<usize>,
    pub critical_edges: Vec<CriticalEdge>,
}
