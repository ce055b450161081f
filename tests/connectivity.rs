use weighted_graph_engine::domain::graph::Graph;
use weighted_graph_engine::usecase::connectivity::{
    can_disconnect_with_k_edges, cyclomatic_number, find_common_target,
};
use weighted_graph_engine::usecase::traversal::{
    count_connected_components, find_critical_edges, has_path,
};

#[test]
fn cyclomatic_number_drops_when_triangle_loses_an_edge() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("B", "C", 1).unwrap();
    g.add_edge("C", "A", 1).unwrap();
    assert_eq!(cyclomatic_number(&g), 1);

    g.remove_edge("C", "A").unwrap();
    assert_eq!(cyclomatic_number(&g), 0);
}

#[test]
fn components_count_isolated_vertices() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("C", "D", 1).unwrap();
    g.add_vertex("E");
    assert_eq!(count_connected_components(&g), 3);
    assert!(has_path(&g, "B", "A").unwrap());
    assert!(!has_path(&g, "A", "C").unwrap());
}

#[test]
fn bridge_is_the_only_critical_edge() {
    // Two triangles joined by C-D.
    let mut g = Graph::undirected();
    for (a, b) in [("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("D", "E"), ("E", "F"), ("F", "D")] {
        g.add_edge(a, b, 1).unwrap();
    }

    let critical = find_critical_edges(&g, "A", "F").unwrap();
    assert_eq!(critical.len(), 1);
    assert_eq!((critical[0].from.as_str(), critical[0].to.as_str()), ("C", "D"));

    let verdict = can_disconnect_with_k_edges(&g, "A", "F", 1).unwrap();
    assert!(verdict.feasible);
    assert_eq!(verdict.min_cut, Some(1));

    let verdict = can_disconnect_with_k_edges(&g, "A", "B", 1).unwrap();
    assert!(!verdict.feasible);
    assert_eq!(verdict.min_cut, Some(2));
}

#[test]
fn disconnection_of_unreachable_pair_needs_no_cut() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1).unwrap();
    let verdict = can_disconnect_with_k_edges(&g, "B", "A", 0).unwrap();
    assert!(verdict.feasible);
    assert!(verdict.already_disconnected);
    assert_eq!(verdict.min_cut, Some(0));
}

#[test]
fn common_target_prefers_lowest_index() {
    let mut g = Graph::directed();
    g.add_vertex("X");
    g.add_vertex("Y");
    g.add_edge("U", "Y", 1).unwrap();
    g.add_edge("U", "X", 1).unwrap();
    g.add_edge("V", "X", 1).unwrap();
    g.add_edge("V", "Y", 1).unwrap();

    assert_eq!(find_common_target(&g, "U", "V").unwrap(), Some("X".into()));
    assert_eq!(find_common_target(&g, "X", "Y").unwrap(), None);
}
