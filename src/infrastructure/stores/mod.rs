//! Record Store Implementations
//!
//! Concrete implementations of the `RecordStore` port.

mod log;
mod memory;

pub use log::LogStore;
pub use memory::MemoryStore;
