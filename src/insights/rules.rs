//! The individual insight rules, each a pure function of the filtered view.

use crate::aggregate::{mean, sample_stddev};
use crate::filter::FilteredView;
use indexmap::IndexSet;

/// Distinct segments of attack rows, first-seen order.
pub fn attack_segments(filtered: &FilteredView) -> Vec<String> {
    filtered
        .iter()
        .filter(|r| r.attack_flag)
        .map(|r| r.segment.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Rows strictly above mean + sample stddev. Zero on empty input.
pub fn high_latency_count(filtered: &FilteredView) -> usize {
    let latencies: Vec<f64> = filtered.iter().map(|r| r.latency_ms).collect();
    let Some(m) = mean(&latencies) else {
        return 0;
    };
    let threshold = m + sample_stddev(&latencies);
    latencies.iter().filter(|&&l| l > threshold).count()
}
