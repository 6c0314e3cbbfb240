//! RecordReader port - the capability of reading saved records back
//!
//! Kept separate from `RecordStore` on purpose. Consumers that only
//! persist depend only on the write capability, and write-only backends
//! (a log, a fire-and-forget queue) are never forced to pretend they can
//! read.

use crate::domain::entities::Record;
use crate::domain::ports::record_store::StoreResult;

/// Abstract capability of reading back previously saved records
pub trait RecordReader {
    /// Every record saved so far, in save order
    fn saved(&self) -> StoreResult<Vec<Record>>;
}
