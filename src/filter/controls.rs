//! Control surface: the values each control may take, and turning the
//! current control values into filter criteria.

use super::{FilterCriteria, SegmentFilter};
use crate::error::ControlError;
use crate::records::RecordTable;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Selector value meaning "every segment".
pub const ALL_SEGMENTS: &str = "All";

/// Values the sidebar controls may take for a given table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlDomain {
    /// "All" followed by the table's distinct segments, sorted
    pub segments: Vec<String>,
    /// Slider upper bound: the table's max latency, truncated
    pub max_latency: u64,
}

impl ControlDomain {
    pub fn from_table(table: &RecordTable) -> Self {
        let mut segments = Vec::with_capacity(1);
        segments.push(ALL_SEGMENTS.to_string());
        segments.extend(table.segments());
        let max_latency = table.max_latency().map(|m| m as u64).unwrap_or(0);
        Self { segments, max_latency }
    }
}

/// Raw control values, as a user would set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub segment: String,
    /// `None` leaves the slider at its maximum
    pub max_latency: Option<u64>,
    pub attacks_only: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            segment: ALL_SEGMENTS.to_string(),
            max_latency: None,
            attacks_only: false,
        }
    }
}

impl FilterCriteria {
    pub fn from_controls(controls: &ControlState, domain: &ControlDomain) -> Result<Self, ControlError> {
        let segment = if controls.segment == ALL_SEGMENTS {
            SegmentFilter::All
        } else if domain.segments.iter().skip(1).any(|s| *s == controls.segment) {
            SegmentFilter::Only(controls.segment.clone())
        } else {
            return Err(ControlError::UnknownSegment {
                segment: controls.segment.clone(),
                known: domain.segments.clone(),
            });
        };

        let ceiling = match controls.max_latency {
            Some(requested) if requested > domain.max_latency => {
                warn!(requested, max = domain.max_latency, "latency ceiling clamped to slider maximum");
                domain.max_latency
            }
            Some(requested) => requested,
            None => domain.max_latency,
        };

        Ok(FilterCriteria {
            segment,
            latency_ceiling: ceiling as f64,
            attacks_only: controls.attacks_only,
        })
    }
}
