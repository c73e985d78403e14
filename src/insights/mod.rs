//! Heuristic insight rules over a filtered view. Each rule fires at most once.

mod rules;

pub use rules::{attack_segments, high_latency_count};

use crate::filter::FilteredView;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_ANOMALIES_MESSAGE: &str = "No anomalies detected with current filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Insight {
    /// Distinct segments carrying attack rows, in first-seen order
    AttackSegments { segments: Vec<String> },
    /// Rows with latency above mean + one sample standard deviation
    HighLatency { count: usize },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::AttackSegments { segments } => {
                write!(f, "Attack activity detected in segments: {}", segments.join(", "))
            }
            Insight::HighLatency { count } => write!(
                f,
                "{} connections have unusually high latency (possible performance issues).",
                count
            ),
        }
    }
}

/// Either nothing fired, or at least one insight did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "insights", rename_all = "snake_case")]
pub enum InsightReport {
    NoAnomalies,
    Anomalies(Vec<Insight>),
}

impl InsightReport {
    pub fn is_clear(&self) -> bool {
        matches!(self, InsightReport::NoAnomalies)
    }

    pub fn insights(&self) -> &[Insight] {
        match self {
            InsightReport::NoAnomalies => &[],
            InsightReport::Anomalies(list) => list,
        }
    }

    /// Lines to show the user, with the severity each should be shown at.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        match self {
            InsightReport::NoAnomalies => vec![(Severity::Info, NO_ANOMALIES_MESSAGE.to_string())],
            InsightReport::Anomalies(list) => list.iter().map(|i| (Severity::Warning, i.to_string())).collect(),
        }
    }
}

pub fn generate(filtered: &FilteredView) -> InsightReport {
    let mut insights = Vec::new();

    let segments = attack_segments(filtered);
    if !segments.is_empty() {
        insights.push(Insight::AttackSegments { segments });
    }

    let count = high_latency_count(filtered);
    if count > 0 {
        insights.push(Insight::HighLatency { count });
    }

    if insights.is_empty() {
        InsightReport::NoAnomalies
    } else {
        InsightReport::Anomalies(insights)
    }
}
