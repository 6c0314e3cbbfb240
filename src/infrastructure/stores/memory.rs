//! In-memory record store
//!
//! Keeps saved records in an in-process buffer. The second conforming
//! implementation next to `LogStore`, and the only one honest enough to
//! implement `RecordReader`.

use std::sync::Mutex;

use crate::domain::entities::Record;
use crate::domain::ports::{RecordReader, RecordStore, StoreError, StoreResult};

/// Record store backed by an in-process buffer
///
/// The `Mutex` exists solely to offer a `&self` API; nothing here is
/// concurrent.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn save(&self, record: &Record) -> StoreResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("record buffer poisoned".to_string()))?;
        records.push(record.clone());
        Ok(())
    }
}

impl RecordReader for MemoryStore {
    fn saved(&self) -> StoreResult<Vec<Record>> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("record buffer poisoned".to_string()))?;
        Ok(records.clone())
    }
}
