//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod enrollment_events;
pub mod notifier;
pub mod record_reader;
pub mod record_store;

pub use enrollment_events::{EnrollmentEvent, EnrollmentEventSink, NoopEventSink};
pub use notifier::WelcomeNotifier;
pub use record_reader::RecordReader;
pub use record_store::{RecordStore, StoreError, StoreResult};
