//! Positioned, color-coded nodes and edges for the chart.

use super::{GraphProjection, Layout, Point};
use crate::aggregate::NodeSummary;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Normal,
    Alert,
}

impl Tone {
    pub fn node_color(self) -> &'static str {
        match self {
            Tone::Normal => "green",
            Tone::Alert => "red",
        }
    }

    pub fn edge_color(self) -> &'static str {
        match self {
            Tone::Normal => "#888",
            Tone::Alert => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub position: Point,
    pub mean_latency: f64,
    pub attack_count: u64,
    pub hover: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub destination: String,
    pub from: Point,
    pub to: Point,
    pub latency_ms: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphScene {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

impl GraphScene {
    pub fn build(graph: &GraphProjection, layout: &Layout, stats: &IndexMap<String, NodeSummary>) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|id| {
                let (mean_latency, attack_count) = stats
                    .get(id)
                    .map(|s| (s.mean_latency, s.attack_count))
                    .unwrap_or((0.0, 0));
                NodeView {
                    id: id.clone(),
                    position: layout.get(id).unwrap_or(ORIGIN),
                    mean_latency,
                    attack_count,
                    hover: format!(
                        "{}<br>Avg Latency: {:.1} ms<br>Attack Attempts: {}",
                        id, mean_latency, attack_count
                    ),
                    tone: if attack_count > 0 { Tone::Alert } else { Tone::Normal },
                }
            })
            .collect();

        let edges = graph
            .edges
            .iter()
            .map(|e| EdgeView {
                source: e.source.clone(),
                destination: e.destination.clone(),
                from: layout.get(&e.source).unwrap_or(ORIGIN),
                to: layout.get(&e.destination).unwrap_or(ORIGIN),
                latency_ms: e.latency_ms,
                tone: if e.attack_flag { Tone::Alert } else { Tone::Normal },
            })
            .collect();

        Self { nodes, edges }
    }
}
