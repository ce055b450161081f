use weighted_graph_engine::domain::error::GraphError;
use weighted_graph_engine::domain::graph::Graph;
use weighted_graph_engine::usecase::max_flow::max_flow;
use weighted_graph_engine::usecase::mst::minimum_spanning_tree;

#[test]
fn triangle_spanning_tree_weighs_two() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("B", "C", 1).unwrap();
    g.add_edge("C", "A", 1).unwrap();

    let tree = minimum_spanning_tree(&g).expect("mst");
    assert_eq!(tree.total_weight, 2);
    assert_eq!(tree.edges.len(), 2);
}

#[test]
fn spanning_tree_picks_cheapest_parallel_edge() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 9).unwrap();
    g.add_edge("A", "B", 2).unwrap();
    g.add_edge("B", "C", 3).unwrap();
    g.add_edge("A", "C", 4).unwrap();

    let tree = minimum_spanning_tree(&g).expect("mst");
    assert_eq!(tree.total_weight, 5);
}

#[test]
fn spanning_tree_is_rejected_on_directed_graphs() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1).unwrap();
    assert!(matches!(
        minimum_spanning_tree(&g),
        Err(GraphError::UnsupportedForGraphKind { .. })
    ));
}

#[test]
fn two_route_network_carries_five() {
    let mut g = Graph::directed();
    g.add_edge("source", "A", 3).unwrap();
    g.add_edge("source", "B", 2).unwrap();
    g.add_edge("A", "sink", 3).unwrap();
    g.add_edge("B", "sink", 2).unwrap();

    assert_eq!(max_flow(&g, "source", "sink"), Ok(5));
    assert_eq!(max_flow(&g, "sink", "source"), Ok(0));
}

#[test]
fn bottleneck_limits_flow() {
    let mut g = Graph::directed();
    g.add_edge("s", "a", 10).unwrap();
    g.add_edge("s", "b", 10).unwrap();
    g.add_edge("a", "b", 2).unwrap();
    g.add_edge("a", "t", 4).unwrap();
    g.add_edge("b", "t", 9).unwrap();

    assert_eq!(max_flow(&g, "s", "t"), Ok(13));
}
