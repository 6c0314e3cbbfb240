//! Welcome Notifier Implementations
//!
//! Concrete implementations of the `WelcomeNotifier` port.

mod log;

pub use log::LogNotifier;
