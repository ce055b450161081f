use serde::Serialize;

/// Outgoing edge record. The source is implied by the list it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub to: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(to: usize, weight: i64) -> Self {
        Self { to, weight }
    }
}

/// Per-vertex ordered lists of outgoing edge records.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyStore {
    lists: Vec<Vec<Edge>>,
}

impl AdjacencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Total number of stored records (undirected edges count twice).
    pub fn record_count(&self) -> usize {
        self.lists.iter().map(|v| v.len()).sum()
    }

    pub fn push_vertex(&mut self) {
        self.lists.push(Vec::new());
    }

    pub fn edges(&self, from: usize) -> &[Edge] {
        &self.lists[from]
    }

    pub fn lists(&self) -> &[Vec<Edge>] {
        &self.lists
    }

    pub fn contains(&self, from: usize, edge: Edge) -> bool {
        self.lists[from].contains(&edge)
    }

    pub fn push(&mut self, from: usize, edge: Edge) {
        self.lists[from].push(edge);
    }

    /// Removes the first record from `from` to `to`, returning it.
    pub fn remove_first_to(&mut self, from: usize, to: usize) -> Option<Edge> {
        let pos = self.lists[from].iter().position(|e| e.to == to)?;
        Some(self.lists[from].remove(pos))
    }

    /// Removes the first record equal to `edge`.
    pub fn remove_record(&mut self, from: usize, edge: Edge) -> bool {
        match self.lists[from].iter().position(|e| *e == edge) {
            Some(pos) => {
                self.lists[from].remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops vertex `index`: every record targeting it, its own list, then shifts
    /// targets above `index` down by one.
    pub fn remove_vertex(&mut self, index: usize) {
        for outs in self.lists.iter_mut() {
            outs.retain(|e| e.to != index);
        }
        self.lists.remove(index);
        for outs in self.lists.iter_mut() {
            for e in outs.iter_mut() {
                if e.to > index {
                    e.to -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(n: usize) -> AdjacencyStore {
        let mut s = AdjacencyStore::new();
        for _ in 0..n {
            s.push_vertex();
        }
        s
    }

    #[test]
    fn remove_vertex_drops_incident_records_and_shifts_targets() {
        // 0 -> 1 -> 2 -> 3, 3 -> 0
        let mut s = store(4);
        s.push(0, Edge::new(1, 1));
        s.push(1, Edge::new(2, 2));
        s.push(2, Edge::new(3, 3));
        s.push(3, Edge::new(0, 4));

        s.remove_vertex(1);

        assert_eq!(s.vertex_count(), 3);
        assert!(s.edges(0).is_empty());
        assert_eq!(s.edges(1), [Edge::new(2, 3)]);
        assert_eq!(s.edges(2), [Edge::new(0, 4)]);
    }

    #[test]
    fn remove_first_to_only_takes_one_parallel_record() {
        let mut s = store(2);
        s.push(0, Edge::new(1, 5));
        s.push(0, Edge::new(1, 7));

        assert_eq!(s.remove_first_to(0, 1), Some(Edge::new(1, 5)));
        assert_eq!(s.edges(0), [Edge::new(1, 7)]);
        assert_eq!(s.record_count(), 1);
    }
}
