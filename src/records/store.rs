//! Session-scoped memo of loaded tables, keyed by resource path.

use super::{parse_csv, RecordTable};
use crate::error::DataLoadError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};
use uuid::Uuid;

/// Holds every table loaded during one session. Tables are never mutated
/// after insert; dropping the store ends the session.
pub struct RecordStore {
    session_id: Uuid,
    cache: Mutex<HashMap<PathBuf, Arc<RecordTable>>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<RecordTable>>> {
        // A panic while holding the lock cannot leave a half-written table behind.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Load `resource`, reading it only on the first call for that path.
    pub fn load(&self, resource: &Path) -> Result<Arc<RecordTable>, DataLoadError> {
        if let Some(table) = self.cache().get(resource) {
            debug!(resource = %resource.display(), "record table cache hit");
            return Ok(Arc::clone(table));
        }

        let bytes = std::fs::read(resource).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::NotFound {
                path: resource.to_path_buf(),
            },
            _ => DataLoadError::Unreadable {
                path: resource.to_path_buf(),
                source: e,
            },
        })?;
        let table = Arc::new(parse_csv(resource, &bytes)?);
        info!(
            session = %self.session_id,
            resource = %resource.display(),
            rows = table.len(),
            digest = %table.digest(),
            "loaded record table"
        );

        let mut cache = self.cache();
        let entry = cache
            .entry(resource.to_path_buf())
            .or_insert_with(|| Arc::clone(&table));
        Ok(Arc::clone(entry))
    }

    /// Drop the cached table for `resource`; returns whether one was cached.
    pub fn invalidate(&self, resource: &Path) -> bool {
        let removed = self.cache().remove(resource).is_some();
        if removed {
            debug!(resource = %resource.display(), "record table invalidated");
        }
        removed
    }

    pub fn clear(&self) {
        self.cache().clear();
    }

    pub fn is_cached(&self, resource: &Path) -> bool {
        self.cache().contains_key(resource)
    }
}
