//! Rows to an undirected node/edge set.
//!
//! Rows sharing an unordered node pair collapse into one edge. The edge keeps
//! the orientation of the first such row and the attributes of the last one.

use crate::filter::FilteredView;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub destination: String,
    pub latency_ms: f64,
    pub attack_flag: bool,
    pub segment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphProjection {
    /// First-seen order
    pub nodes: IndexSet<String>,
    pub edges: Vec<Edge>,
}

impl GraphProjection {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edge between `a` and `b` in either direction.
    pub fn edge(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| (e.source == a && e.destination == b) || (e.source == b && e.destination == a))
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

pub fn project(filtered: &FilteredView) -> GraphProjection {
    let mut nodes = IndexSet::new();
    let mut edges: IndexMap<(String, String), Edge> = IndexMap::new();

    for row in filtered {
        nodes.insert(row.source.clone());
        nodes.insert(row.destination.clone());

        let key = pair_key(&row.source, &row.destination);
        match edges.get_mut(&key) {
            Some(edge) => {
                edge.latency_ms = row.latency_ms;
                edge.attack_flag = row.attack_flag;
                edge.segment.clone_from(&row.segment);
            }
            None => {
                edges.insert(
                    key,
                    Edge {
                        source: row.source.clone(),
                        destination: row.destination.clone(),
                        latency_ms: row.latency_ms,
                        attack_flag: row.attack_flag,
                        segment: row.segment.clone(),
                    },
                );
            }
        }
    }

    GraphProjection {
        nodes,
        edges: edges.into_values().collect(),
    }
}
