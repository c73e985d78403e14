//! Per-node statistics: a node's numbers cover every filtered row it
//! appears in, inbound and outbound.

use crate::filter::FilteredView;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub node: String,
    pub mean_latency: f64,
    pub attack_count: u64,
    /// Filtered rows touching this node
    pub connections: usize,
}

#[derive(Default)]
struct Acc {
    latency_sum: f64,
    attack_count: u64,
    connections: usize,
}

/// Summaries keyed by node id, in first-seen order (source before destination).
pub fn node_summaries(filtered: &FilteredView) -> IndexMap<String, NodeSummary> {
    let mut acc: IndexMap<&str, Acc> = IndexMap::new();
    for row in filtered {
        let destination = (row.destination != row.source).then_some(row.destination.as_str());
        for node in std::iter::once(row.source.as_str()).chain(destination) {
            let a = acc.entry(node).or_default();
            a.latency_sum += row.latency_ms;
            a.attack_count += row.attack_value();
            a.connections += 1;
        }
    }

    acc.into_iter()
        .map(|(node, a)| {
            let summary = NodeSummary {
                node: node.to_string(),
                // connections >= 1 for every key
                mean_latency: a.latency_sum / a.connections as f64,
                attack_count: a.attack_count,
                connections: a.connections,
            };
            (node.to_string(), summary)
        })
        .collect()
}
