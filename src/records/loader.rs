//! CSV parsing: header check, typed rows, value validation.

use super::{ConnectionRecord, RecordTable};
use crate::error::DataLoadError;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 5] = ["source", "destination", "latency_ms", "attack_flag", "segment"];

#[derive(Debug, Deserialize)]
struct RawRecord {
    source: String,
    destination: String,
    latency_ms: f64,
    attack_flag: u8,
    segment: String,
}

/// Parse raw CSV bytes read from `resource` into a table.
pub fn parse_csv(resource: &Path, bytes: &[u8]) -> Result<RecordTable, DataLoadError> {
    let invalid = |line: u64, reason: String| DataLoadError::InvalidRow {
        path: resource.to_path_buf(),
        line,
        reason,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = rdr.headers().map_err(|e| invalid(1, e.to_string()))?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns {
            path: resource.to_path_buf(),
            missing,
        });
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            invalid(line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| invalid(line, e.to_string()))?;

        if !raw.latency_ms.is_finite() || raw.latency_ms < 0.0 {
            return Err(invalid(line, format!("latency_ms must be a non-negative number, got {}", raw.latency_ms)));
        }
        let attack_flag = match raw.attack_flag {
            0 => false,
            1 => true,
            other => return Err(invalid(line, format!("attack_flag must be 0 or 1, got {}", other))),
        };

        rows.push(ConnectionRecord {
            source: raw.source,
            destination: raw.destination,
            latency_ms: raw.latency_ms,
            attack_flag,
            segment: raw.segment,
        });
    }

    let digest = format!("{:x}", Sha256::digest(bytes));
    Ok(RecordTable::new(resource, digest, rows))
}
