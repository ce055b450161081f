use crate::domain::adjacency::{AdjacencyStore, Edge};
use crate::domain::error::{GraphError, Result};
use crate::domain::registry::VertexRegistry;
use crate::domain::traits::{GraphView, Neighbor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    /// Header token used by the edge-list file format.
    pub fn header(self) -> &'static str {
        match self {
            GraphKind::Directed => "Directed",
            GraphKind::Undirected => "Undirected",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => f.write_str("directed"),
            GraphKind::Undirected => f.write_str("undirected"),
        }
    }
}

/// Opaque vertex handle. Only valid until the next vertex removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId {
    index: usize,
    generation: u64,
}

/// Mutable weighted graph: vertex registry plus adjacency store.
///
/// Undirected edges are stored as two mirrored records with the same weight.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    registry: VertexRegistry,
    store: AdjacencyStore,
    generation: u64,
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            registry: VertexRegistry::new(),
            store: AdjacencyStore::new(),
            generation: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    /// Logical edge count: mirrored undirected records count once.
    pub fn edge_count(&self) -> usize {
        let records = self.store.record_count();
        if self.is_directed() {
            records
        } else {
            records / 2
        }
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Vertex names in index order.
    pub fn vertex_names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.registry.index_of(name).map(|index| VertexId {
            index,
            generation: self.generation,
        })
    }

    pub(crate) fn registry(&self) -> &VertexRegistry {
        &self.registry
    }

    pub(crate) fn store(&self) -> &AdjacencyStore {
        &self.store
    }

    pub(crate) fn edges_from(&self, index: usize) -> &[Edge] {
        self.store.edges(index)
    }

    pub(crate) fn index_of(&self, name: &str) -> Result<usize> {
        self.registry
            .index_of(name)
            .ok_or_else(|| GraphError::VertexNotFound {
                name: name.to_string(),
            })
    }

    pub(crate) fn name_at(&self, index: usize) -> &str {
        self.registry.name_of(index).unwrap_or_default()
    }

    pub(crate) fn names_of(&self, path: &[usize]) -> Vec<String> {
        path.iter().map(|&i| self.name_at(i).to_string()).collect()
    }

    fn resolve(&self, id: VertexId) -> Result<usize> {
        if id.generation != self.generation || id.index >= self.vertex_count() {
            return Err(GraphError::StaleVertexHandle {
                index: id.index,
                generation: id.generation,
            });
        }
        Ok(id.index)
    }

    /// Adds a vertex; returns `false` if the name was already registered.
    pub fn add_vertex(&mut self, name: &str) -> bool {
        let (_, inserted) = self.registry.insert(name);
        if inserted {
            self.store.push_vertex();
        }
        inserted
    }

    /// Removes a vertex and every edge touching it, renumbering the remaining
    /// vertices densely. Invalidates all outstanding [`VertexId`]s.
    pub fn remove_vertex(&mut self, name: &str) -> Result<()> {
        let index = self.index_of(name)?;
        self.store.remove_vertex(index);
        self.registry.remove_at(index);
        self.generation += 1;
        Ok(())
    }

    /// Adds an edge, creating missing endpoints. An existing record with the same
    /// target and weight rejects the insert; parallel edges with other weights are kept.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        self.add_vertex(from);
        self.add_vertex(to);
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;

        let edge = Edge::new(v, weight);
        if self.store.contains(u, edge) {
            return Err(GraphError::DuplicateEdgeRejected {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        self.store.push(u, edge);
        if !self.is_directed() {
            self.store.push(v, Edge::new(u, weight));
        }
        Ok(())
    }

    /// Removes the first edge from `from` to `to` (and its mirror when undirected).
    /// Returns the removed edge's weight.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<i64> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;

        let Some(removed) = self.store.remove_first_to(u, v) else {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        if !self.is_directed() {
            self.store.remove_record(v, Edge::new(u, removed.weight));
        }
        Ok(removed.weight)
    }

    /// Number of records leaving `name`. Directed graphs only.
    pub fn out_degree(&self, name: &str) -> Result<usize> {
        if !self.is_directed() {
            return Err(GraphError::UnsupportedForGraphKind {
                operation: "out-degree",
                kind: self.kind,
            });
        }
        let u = self.index_of(name)?;
        Ok(self.store.edges(u).len())
    }

    /// Builds the transpose of a directed graph.
    pub fn reverse(&self) -> Result<Graph> {
        if !self.is_directed() {
            return Err(GraphError::UnsupportedForGraphKind {
                operation: "graph reversal",
                kind: self.kind,
            });
        }

        let mut reversed = Graph::directed();
        for name in self.registry.names() {
            reversed.add_vertex(name);
        }
        for (u, outs) in self.store.lists().iter().enumerate() {
            for e in outs {
                reversed.add_edge(self.name_at(e.to), self.name_at(u), e.weight)?;
            }
        }
        Ok(reversed)
    }

    /// Logical edges as (from, to, weight): every directed record, or each
    /// undirected edge once.
    pub fn edge_triples(&self) -> Vec<(&str, &str, i64)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (u, outs) in self.store.lists().iter().enumerate() {
            for (pos, e) in outs.iter().enumerate() {
                let keep = if self.is_directed() {
                    true
                } else if e.to == u {
                    // Both mirror records of a self-loop live in this list.
                    !outs[..pos].contains(e)
                } else {
                    u < e.to
                };
                if keep {
                    out.push((self.name_at(u), self.name_at(e.to), e.weight));
                }
            }
        }
        out
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}

impl GraphView for Graph {
    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        (0..self.vertex_count())
            .map(|index| VertexId {
                index,
                generation: self.generation,
            })
            .collect()
    }

    fn vertex_name(&self, id: VertexId) -> Result<&str> {
        let index = self.resolve(id)?;
        Ok(self.name_at(index))
    }

    fn adjacency(&self, id: VertexId) -> Result<Vec<Neighbor>> {
        let index = self.resolve(id)?;
        Ok(self
            .store
            .edges(index)
            .iter()
            .map(|e| Neighbor {
                target: VertexId {
                    index: e.to,
                    generation: self.generation,
                },
                weight: e.weight,
            })
            .collect())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, outs) in self.store.lists().iter().enumerate() {
            write!(f, "{}:", self.name_at(u))?;
            for e in outs {
                write!(f, " ({}, weight: {})", self.name_at(e.to), e.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_mirrors_undirected_records() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 4).expect("add");

        let a = g.index_of("A").unwrap();
        let b = g.index_of("B").unwrap();
        assert_eq!(g.edges_from(a), [Edge::new(b, 4)]);
        assert_eq!(g.edges_from(b), [Edge::new(a, 4)]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn duplicate_edge_is_rejected_but_parallel_weight_is_kept() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1).expect("add");

        let err = g.add_edge("A", "B", 1).unwrap_err();
        assert_eq!(err.kind(), "duplicate_edge_rejected");

        g.add_edge("A", "B", 2).expect("parallel");
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn undirected_mirror_counts_as_duplicate() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 3).expect("add");
        assert!(matches!(
            g.add_edge("B", "A", 3),
            Err(GraphError::DuplicateEdgeRejected { .. })
        ));
    }

    #[test]
    fn remove_edge_removes_both_mirrors() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 3).expect("add");
        g.add_edge("B", "C", 1).expect("add");

        assert_eq!(g.remove_edge("B", "A"), Ok(3));
        assert_eq!(g.edge_count(), 1);
        assert!(g.edges_from(g.index_of("A").unwrap()).is_empty());
    }

    #[test]
    fn remove_edge_reports_missing_vertex_and_edge() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1).expect("add");

        assert!(matches!(
            g.remove_edge("A", "Z"),
            Err(GraphError::VertexNotFound { .. })
        ));
        assert!(matches!(
            g.remove_edge("B", "A"),
            Err(GraphError::EdgeNotFound { .. })
        ));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn undirected_self_loop_round_trips_through_edge_triples() {
        let mut g = Graph::undirected();
        g.add_edge("A", "A", 2).expect("add");
        g.add_edge("A", "B", 1).expect("add");

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge_triples(), vec![("A", "A", 2), ("A", "B", 1)]);

        g.remove_edge("A", "A").expect("remove loop");
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn out_degree_and_reverse_are_directed_only() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 1).expect("add");
        assert!(matches!(
            g.out_degree("A"),
            Err(GraphError::UnsupportedForGraphKind { .. })
        ));
        assert!(g.reverse().is_err());

        let mut d = Graph::directed();
        d.add_edge("A", "B", 1).expect("add");
        d.add_edge("A", "C", 2).expect("add");
        assert_eq!(d.out_degree("A"), Ok(2));
        assert_eq!(d.out_degree("B"), Ok(0));

        let r = d.reverse().expect("reverse");
        assert_eq!(r.out_degree("A"), Ok(0));
        assert_eq!(r.out_degree("C"), Ok(1));
    }

    #[test]
    fn vertex_handles_go_stale_after_removal() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1).expect("add");
        g.add_edge("B", "C", 1).expect("add");

        let c = g.vertex_id("C").expect("id");
        assert_eq!(g.vertex_name(c), Ok("C"));

        g.remove_vertex("A").expect("remove");
        assert!(matches!(
            g.vertex_name(c),
            Err(GraphError::StaleVertexHandle { .. })
        ));

        let c = g.vertex_id("C").expect("fresh id");
        assert_eq!(g.vertex_name(c), Ok("C"));
        assert!(g.adjacency(c).expect("adjacency").is_empty());
    }

    #[test]
    fn display_lists_adjacency_by_name() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1).expect("add");
        g.add_edge("A", "C", 2).expect("add");
        assert_eq!(
            g.to_string(),
            "A: (B, weight: 1) (C, weight: 2)\nB:\nC:\n"
        );
    }
}
