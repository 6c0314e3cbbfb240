//! Log-backed record store
//!
//! Stands in for a real database: "persisting" a record means emitting
//! one structured log line that carries the full field map. Write-only,
//! always succeeds.

use tracing::info;

use crate::domain::entities::Record;
use crate::domain::ports::{RecordStore, StoreError, StoreResult};

/// Record store that persists by logging
pub struct LogStore;

impl LogStore {
    /// Create a new store
    pub fn new() -> Self {
        Self
    }

    /// Render the persistence line for one record
    fn render_line(&self, record: &Record) -> StoreResult<String> {
        let fields = serde_json::to_string(record)
            .map_err(|err| StoreError::Rejected(err.to_string()))?;
        Ok(format!("persisted record {}", fields))
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for LogStore {
    fn save(&self, record: &Record) -> StoreResult<()> {
        let line = self.render_line(record)?;
        info!(target: "enroll::store", "{}", line);
        Ok(())
    }
}
