use tempfile::tempdir;
use weighted_graph_engine::domain::graph::Graph;
use weighted_graph_engine::infrastructure::edge_list::{
    parse_edge_list, read_graph_file, render_edge_list, write_graph_file,
};

fn sorted_triples(g: &Graph) -> Vec<(String, String, i64)> {
    let mut out: Vec<_> = g
        .edge_triples()
        .into_iter()
        .map(|(a, b, w)| (a.to_string(), b.to_string(), w))
        .collect();
    out.sort();
    out
}

#[tokio::test]
async fn written_graph_reads_back_with_same_edges() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("roads.txt");
    let path = path.to_str().unwrap();

    let mut g = Graph::undirected();
    g.add_edge("Oslo", "Bergen", 463).unwrap();
    g.add_edge("Oslo", "Trondheim", 494).unwrap();
    g.add_edge("Bergen", "Bergen", 1).unwrap();
    g.add_edge("Oslo", "Bergen", 500).unwrap();

    write_graph_file(path, &g).await.expect("write");
    let loaded = read_graph_file(path).await.expect("read");

    assert!(loaded.stopped_at.is_none());
    assert!(loaded.rejected.is_empty());
    assert!(!loaded.graph.is_directed());
    assert_eq!(loaded.graph.edge_count(), 4);
    assert_eq!(sorted_triples(&loaded.graph), sorted_triples(&g));
}

#[tokio::test]
async fn missing_file_is_reported_with_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nope.txt");

    let err = read_graph_file(path.to_str().unwrap()).await.unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"));
}

#[tokio::test]
async fn bad_header_fails_the_whole_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "Bidirected\nA B 1\n").expect("write");

    let err = read_graph_file(path.to_str().unwrap()).await.unwrap_err();
    assert!(format!("{err:#}").contains("file format error at line 1"));
}

#[test]
fn directed_graph_keeps_both_directions_as_separate_lines() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("B", "A", 1).unwrap();

    let text = render_edge_list(&g);
    assert_eq!(text, "Directed\nA B 1\nB A 1\n");

    let loaded = parse_edge_list(&text).expect("parse");
    assert_eq!(loaded.graph.edge_count(), 2);
}

#[test]
fn negative_weights_parse() {
    let loaded = parse_edge_list("Directed\nA B -7\n").expect("parse");
    assert_eq!(loaded.graph.edge_triples(), vec![("A", "B", -7)]);
}
