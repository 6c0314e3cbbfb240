//! Enroll - user enrollment with pluggable record storage
//!
//! Enroll is a small demonstration library: a high-level enrollment flow
//! that depends on storage and notification *capabilities* (trait-defined
//! ports) rather than concrete technologies. Implementations are injected
//! at construction time, so swapping the backing store never touches the
//! service code.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::RegistrationService;
pub use domain::entities::{Record, User};
pub use domain::ports::{
    EnrollmentEvent, EnrollmentEventSink, NoopEventSink, RecordReader, RecordStore, StoreError,
    StoreResult, WelcomeNotifier,
};
pub use domain::value_objects::Email;
pub use error::{EnrollError, EnrollResult};
pub use infrastructure::{LogNotifier, LogStore, MemoryStore};
