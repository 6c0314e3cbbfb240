//! Application Layer
//!
//! The consuming service that orchestrates the enrollment flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//! - Never constructs its own dependencies; they arrive via the constructor

pub mod registration;

pub use registration::RegistrationService;
