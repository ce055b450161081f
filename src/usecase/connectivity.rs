use crate::domain::error::Result;
use crate::domain::graph::Graph;
use crate::domain::model::DisconnectionVerdict;
use crate::usecase::max_flow::unit_capacity_min_cut;
use crate::usecase::traversal::{count_connected_components, critical_edges, reaches};
use std::collections::BTreeSet;

/// Edges - vertices + components, undirected edges counted once.
pub fn cyclomatic_number(graph: &Graph) -> i64 {
    let edges = graph.edge_count() as i64;
    let vertices = graph.vertex_count() as i64;
    let components = count_connected_components(graph) as i64;
    edges - vertices + components
}

/// A vertex that both `u` and `v` have an edge into. The lowest-indexed one wins
/// when there are several.
pub fn find_common_target(graph: &Graph, u: &str, v: &str) -> Result<Option<String>> {
    let a = graph.index_of(u)?;
    let b = graph.index_of(v)?;

    let from_a: BTreeSet<usize> = graph.edges_from(a).iter().map(|e| e.to).collect();
    let from_b: BTreeSet<usize> = graph.edges_from(b).iter().map(|e| e.to).collect();

    Ok(from_a
        .intersection(&from_b)
        .next()
        .map(|&t| graph.name_at(t).to_string()))
}

/// Whether removing at most `k` edges can leave `v` unreachable from `u`.
///
/// Already-disconnected pairs are trivially feasible. A single critical edge
/// settles the question for any `k >= 1`; otherwise the minimum edge cut is
/// measured with unit-capacity max flow. `u == v` can never be disconnected.
pub fn can_disconnect_with_k_edges(
    graph: &Graph,
    u: &str,
    v: &str,
    k: usize,
) -> Result<DisconnectionVerdict> {
    let a = graph.index_of(u)?;
    let b = graph.index_of(v)?;

    if a == b {
        return Ok(DisconnectionVerdict {
            feasible: false,
            already_disconnected: false,
            min_cut: None,
            critical_edges: Vec::new(),
        });
    }

    if !reaches(graph, a, b, None) {
        return Ok(DisconnectionVerdict {
            feasible: true,
            already_disconnected: true,
            min_cut: Some(0),
            critical_edges: Vec::new(),
        });
    }

    let critical = critical_edges(graph, a, b);
    let min_cut = if critical.is_empty() {
        unit_capacity_min_cut(graph, a, b)
    } else {
        1
    };

    Ok(DisconnectionVerdict {
        feasible: min_cut <= k,
        already_disconnected: false,
        min_cut: Some(min_cut),
        critical_edges: critical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclomatic_number_counts_independent_cycles() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 1).unwrap();
        g.add_edge("C", "A", 1).unwrap();
        g.add_edge("D", "E", 1).unwrap();
        assert_eq!(cyclomatic_number(&g), 1);
    }

    #[test]
    fn common_target_prefers_lowest_index() {
        let mut g = Graph::directed();
        g.add_vertex("Z");
        g.add_vertex("Y");
        g.add_edge("A", "Y", 1).unwrap();
        g.add_edge("A", "Z", 1).unwrap();
        g.add_edge("B", "Z", 1).unwrap();
        g.add_edge("B", "Y", 1).unwrap();

        assert_eq!(find_common_target(&g, "A", "B"), Ok(Some("Z".to_string())));
        assert_eq!(find_common_target(&g, "A", "Z"), Ok(None));
    }

    #[test]
    fn chain_is_cut_by_one_edge() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 1).unwrap();

        let verdict = can_disconnect_with_k_edges(&g, "A", "C", 1).expect("verdict");
        assert!(verdict.feasible);
        assert_eq!(verdict.min_cut, Some(1));
        assert_eq!(verdict.critical_edges.len(), 2);

        let verdict = can_disconnect_with_k_edges(&g, "A", "C", 0).expect("verdict");
        assert!(!verdict.feasible);
    }

    #[test]
    fn redundant_routes_need_a_larger_budget() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 1).unwrap();
        g.add_edge("A", "C", 1).unwrap();

        let verdict = can_disconnect_with_k_edges(&g, "A", "C", 1).expect("verdict");
        assert!(!verdict.feasible);
        assert_eq!(verdict.min_cut, Some(2));
        assert!(verdict.critical_edges.is_empty());

        assert!(can_disconnect_with_k_edges(&g, "A", "C", 2).unwrap().feasible);
    }

    #[test]
    fn disconnected_pair_is_trivially_feasible() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1).unwrap();

        let verdict = can_disconnect_with_k_edges(&g, "B", "A", 0).expect("verdict");
        assert!(verdict.feasible);
        assert!(verdict.already_disconnected);
    }
}
