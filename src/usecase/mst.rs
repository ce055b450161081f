use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Graph;
use crate::domain::model::{SpanningTree, TreeEdge};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Prim's minimum spanning tree, grown from the first vertex.
///
/// Undirected graphs only. Vertices unreachable from the first vertex are left
/// out: a full spanning tree needs a connected graph, which is not checked here.
/// Weights are assumed non-negative.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    if graph.is_directed() {
        return Err(GraphError::UnsupportedForGraphKind {
            operation: "minimum spanning tree",
            kind: graph.kind(),
        });
    }

    let n = graph.vertex_count();
    if n == 0 {
        return Ok(SpanningTree::default());
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![i64::MAX; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut frontier = BinaryHeap::new();

    best[0] = 0;
    frontier.push(Reverse((0i64, 0usize)));

    while let Some(Reverse((_, u))) = frontier.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        for e in graph.edges_from(u) {
            if !in_tree[e.to] && e.weight < best[e.to] {
                best[e.to] = e.weight;
                parent[e.to] = Some(u);
                frontier.push(Reverse((e.weight, e.to)));
            }
        }
    }

    let mut tree = SpanningTree::default();
    for (child, p) in parent.iter().enumerate() {
        let Some(p) = *p else { continue };
        tree.total_weight += best[child];
        tree.edges.push(TreeEdge {
            parent: graph.name_at(p).to_string(),
            child: graph.name_at(child).to_string(),
            weight: best[child],
        });
    }
    Ok(tree)
}
