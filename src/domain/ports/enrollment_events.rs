//! Enrollment Event Port
//!
//! Provides an observable interface for the enrollment flow.
//! Enables progress reporting and test assertions on ordering.

/// Event emitted during enrollment
#[derive(Debug, Clone)]
pub enum EnrollmentEvent {
    /// Enrollment started
    Started { name: String },

    /// The record reached the store
    RecordSaved { field_count: usize },

    /// The welcome message went out
    WelcomeSent { email: String },

    /// Enrollment completed
    Completed,
}

/// Trait for receiving enrollment events
///
/// Implementations can be:
/// - A progress display
/// - A recording sink in tests
/// - `NoopEventSink`: silent operation
pub trait EnrollmentEventSink: Send + Sync {
    /// Handle an enrollment event
    fn on_event(&self, event: EnrollmentEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EnrollmentEventSink for NoopEventSink {
    fn on_event(&self, _event: EnrollmentEvent) {
        // Do nothing
    }
}
