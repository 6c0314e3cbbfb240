//! Registration Service
//!
//! The high-level unit of the crate. It holds a record store and a
//! welcome notifier typed as their port traits, both supplied at
//! construction time, and forwards work to them. It never picks a
//! concrete backend itself, which is what makes the backends swappable
//! without touching this file.

use std::sync::Arc;

use crate::domain::entities::{Record, User};
use crate::domain::ports::{
    EnrollmentEvent, EnrollmentEventSink, NoopEventSink, RecordStore, StoreResult, WelcomeNotifier,
};
use crate::error::EnrollResult;

/// Enrollment service parameterized by its dependencies (ports)
pub struct RegistrationService<S, N>
where
    S: RecordStore,
    N: WelcomeNotifier,
{
    store: S,
    notifier: N,
}

impl<S, N> RegistrationService<S, N>
where
    S: RecordStore,
    N: WelcomeNotifier,
{
    /// Create the service around an injected store and notifier
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// Forward one record to the injected store
    ///
    /// No validation, no retry: the record goes through unmodified, and a
    /// store failure surfaces unchanged to the caller.
    pub fn save_user(&self, record: &Record) -> StoreResult<()> {
        self.store.save(record)
    }

    /// Enroll a user: persist the record, then send the welcome
    pub fn enroll(&self, user: &User) -> EnrollResult<()> {
        self.enroll_with_events(user, Arc::new(NoopEventSink))
    }

    /// Enroll a user, reporting progress to the given sink
    pub fn enroll_with_events(
        &self,
        user: &User,
        events: Arc<dyn EnrollmentEventSink>,
    ) -> EnrollResult<()> {
        events.on_event(EnrollmentEvent::Started {
            name: user.name().to_string(),
        });

        let record = Record::from(user);
        self.store.save(&record)?;
        events.on_event(EnrollmentEvent::RecordSaved {
            field_count: record.len(),
        });

        self.notifier.welcome(user)?;
        events.on_event(EnrollmentEvent::WelcomeSent {
            email: user.email().to_string(),
        });

        events.on_event(EnrollmentEvent::Completed);
        Ok(())
    }

    /// The injected store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The injected notifier
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
