//! Filter engine: segment match, latency ceiling, attack-only toggle.

mod controls;

pub use controls::{ControlDomain, ControlState, ALL_SEGMENTS};

use crate::records::{ConnectionRecord, RecordTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentFilter {
    /// Segment predicate is a no-op
    All,
    Only(String),
}

impl SegmentFilter {
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            SegmentFilter::All => true,
            SegmentFilter::Only(wanted) => wanted == segment,
        }
    }
}

/// Predicates for one pipeline run. All three must hold for a row to pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub segment: SegmentFilter,
    /// Inclusive upper bound on latency_ms
    pub latency_ceiling: f64,
    pub attacks_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            segment: SegmentFilter::All,
            latency_ceiling: f64::INFINITY,
            attacks_only: false,
        }
    }
}

impl FilterCriteria {
    pub fn accepts(&self, row: &ConnectionRecord) -> bool {
        self.segment.matches(&row.segment)
            && row.latency_ms <= self.latency_ceiling
            && (!self.attacks_only || row.attack_flag)
    }
}

/// Rows of a table that passed a set of criteria, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredView {
    rows: Vec<ConnectionRecord>,
}

impl FilteredView {
    pub fn new(rows: Vec<ConnectionRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ConnectionRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConnectionRecord> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a ConnectionRecord;
    type IntoIter = std::slice::Iter<'a, ConnectionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Pure filter over `rows`; the source is never modified.
pub fn apply(rows: &[ConnectionRecord], criteria: &FilterCriteria) -> FilteredView {
    FilteredView::new(rows.iter().filter(|r| criteria.accepts(r)).cloned().collect())
}

pub fn apply_table(table: &RecordTable, criteria: &FilterCriteria) -> FilteredView {
    apply(table.rows(), criteria)
}
