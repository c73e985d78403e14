//! Summary metrics and per-node statistics over a filtered view.

mod nodes;
mod stats;

pub use nodes::{node_summaries, NodeSummary};
pub use stats::{mean, sample_stddev};

use crate::filter::FilteredView;
use serde::{Deserialize, Serialize};

/// The three dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_connections: usize,
    /// Full precision; 0 when there are no rows
    pub average_latency_ms: f64,
    pub attack_attempts: u64,
}

impl Summary {
    /// Average latency rounded to two decimals for display.
    pub fn average_latency_rounded(&self) -> f64 {
        round2(self.average_latency_ms)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn summarize(filtered: &FilteredView) -> Summary {
    let latencies: Vec<f64> = filtered.iter().map(|r| r.latency_ms).collect();
    Summary {
        total_connections: filtered.len(),
        average_latency_ms: mean(&latencies).unwrap_or(0.0),
        attack_attempts: filtered.iter().map(|r| r.attack_value()).sum(),
    }
}
