//! WelcomeNotifier port - abstraction for greeting a new user
//!
//! Separating this from storage keeps each implementation to one job:
//! stores persist, notifiers greet.

use anyhow::Result;

use crate::domain::entities::User;

/// Abstract capability of sending a welcome message
///
/// This trait is implemented by infrastructure layer.
pub trait WelcomeNotifier {
    /// Send (or record) a welcome message for the user
    fn welcome(&self, user: &User) -> Result<()>;
}
