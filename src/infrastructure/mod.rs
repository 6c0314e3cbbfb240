//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `stores/` - Record store implementations (Log, Memory)
//! - `notifiers/` - Welcome notifier implementations (Log)

pub mod notifiers;
pub mod stores;

// Re-export for convenience
pub use notifiers::LogNotifier;
pub use stores::{LogStore, MemoryStore};
