use crate::domain::error::Result;
use crate::domain::traits::GraphView;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEdge {
    pub to: String,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotVertex {
    pub name: String,
    pub edges: Vec<SnapshotEdge>,
}

/// Owned, serializable copy of everything a [`GraphView`] exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub directed: bool,
    pub vertices: Vec<SnapshotVertex>,
}

impl GraphSnapshot {
    pub fn capture(view: &dyn GraphView) -> Result<Self> {
        let mut vertices = Vec::with_capacity(view.vertex_count());
        for id in view.vertex_ids() {
            let edges = view
                .adjacency(id)?
                .into_iter()
                .map(|n| {
                    Ok(SnapshotEdge {
                        to: view.vertex_name(n.target)?.to_string(),
                        weight: n.weight,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            vertices.push(SnapshotVertex {
                name: view.vertex_name(id)?.to_string(),
                edges,
            });
        }
        Ok(Self {
            directed: view.is_directed(),
            vertices,
        })
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::Graph;

    #[test]
    fn snapshot_lists_every_record_by_name() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 2).unwrap();
        g.add_vertex("C");

        let snap = GraphSnapshot::capture(&g).expect("snapshot");
        assert!(!snap.directed);
        assert_eq!(snap.vertices.len(), 3);
        assert_eq!(
            snap.vertices[1].edges,
            vec![SnapshotEdge {
                to: "A".into(),
                weight: 2
            }]
        );
        assert!(snap.vertices[2].edges.is_empty());

        let v: serde_json::Value =
            serde_json::from_str(&snap.to_json_pretty().expect("json")).expect("parse");
        assert_eq!(v["vertices"][0]["name"], "A");
        assert_eq!(v["vertices"][0]["edges"][0]["to"], "B");
    }
}
