//! Log-backed welcome notifier
//!
//! Stands in for a mail system: the welcome message becomes one log line.

use anyhow::Result;
use tracing::info;

use crate::domain::entities::User;
use crate::domain::ports::WelcomeNotifier;

/// Notifier that greets users through the log
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeNotifier for LogNotifier {
    fn welcome(&self, user: &User) -> Result<()> {
        info!(
            target: "enroll::notify",
            "welcome message queued for {} <{}>",
            user.name(),
            user.email()
        );
        Ok(())
    }
}
