//! Connection records and the session-scoped record store.

mod loader;
mod store;

pub use loader::{parse_csv, REQUIRED_COLUMNS};
pub use store::RecordStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub source: String,
    pub destination: String,
    pub latency_ms: f64,
    pub attack_flag: bool,
    pub segment: String,
}

impl ConnectionRecord {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        latency_ms: f64,
        attack_flag: bool,
        segment: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            latency_ms,
            attack_flag,
            segment: segment.into(),
        }
    }

    /// Attack flag as the 0/1 value it has in the dataset.
    pub fn attack_value(&self) -> u64 {
        u64::from(self.attack_flag)
    }
}

/// Immutable table loaded from one resource. Shared as `Arc<RecordTable>`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordTable {
    resource: PathBuf,
    /// Hex SHA-256 of the raw resource bytes
    digest: String,
    rows: Vec<ConnectionRecord>,
}

impl RecordTable {
    pub fn new(resource: impl Into<PathBuf>, digest: impl Into<String>, rows: Vec<ConnectionRecord>) -> Self {
        Self {
            resource: resource.into(),
            digest: digest.into(),
            rows,
        }
    }

    /// In-memory table with no backing resource.
    pub fn from_rows(rows: Vec<ConnectionRecord>) -> Self {
        Self::new("<memory>", String::new(), rows)
    }

    pub fn resource(&self) -> &Path {
        &self.resource
    }

    pub fn digest(&self) -> &str {
        &self.digest
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

    /// Distinct segment values, sorted.
    pub fn segments(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.segment.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Largest latency in the table; `None` when empty.
    pub fn max_latency(&self) -> Option<f64> {
        self.rows.iter().map(|r| r.latency_ms).reduce(f64::max)
    }
}
