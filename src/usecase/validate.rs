use crate::domain::graph::Graph;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;

/// Checks the structural invariants of a graph:
/// - registry names and indices are exact inverses
/// - adjacency store has one list per vertex and every target is in range
/// - no two identical records (undirected self-loops store exactly two)
/// - undirected records come in mirrored pairs with equal weight
pub fn validate_graph(graph: &Graph) -> Result<()> {
    let registry = graph.registry();
    let store = graph.store();
    let n = registry.len();

    if store.vertex_count() != n {
        return Err(anyhow!(
            "adjacency store has {} lists for {n} vertices",
            store.vertex_count()
        ));
    }

    for (i, name) in registry.names().iter().enumerate() {
        if registry.index_of(name) != Some(i) {
            return Err(anyhow!("registry maps {name} away from index {i}"));
        }
    }

    // (from, to, weight) -> number of stored records
    let mut records: BTreeMap<(usize, usize, i64), usize> = BTreeMap::new();
    for (u, outs) in store.lists().iter().enumerate() {
        for e in outs {
            if e.to >= n {
                return Err(anyhow!(
                    "edge from {} targets index {} outside 0..{n}",
                    graph.name_at(u),
                    e.to
                ));
            }
            *records.entry((u, e.to, e.weight)).or_insert(0) += 1;
        }
    }

    for (&(u, v, w), &count) in records.iter() {
        let from = graph.name_at(u);
        let to = graph.name_at(v);
        let expected = if !graph.is_directed() && u == v { 2 } else { 1 };
        if count != expected {
            return Err(anyhow!(
                "duplicate edge {from} -> {to} (weight {w}) stored {count} times"
            ));
        }
        if !graph.is_directed() && !records.contains_key(&(v, u, w)) {
            return Err(anyhow!("undirected edge {from} -> {to} (weight {w}) has no mirror"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_graph_after_mixed_mutations() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 2).unwrap();
        g.add_edge("C", "C", 3).unwrap();
        g.add_edge("C", "A", 4).unwrap();
        g.remove_vertex("B").unwrap();
        g.remove_edge("A", "C").unwrap();
        g.add_edge("D", "A", 5).unwrap();

        validate_graph(&g).expect("valid");
    }

    #[test]
    fn validate_accepts_empty_graph() {
        validate_graph(&Graph::directed()).expect("valid");
    }
}
