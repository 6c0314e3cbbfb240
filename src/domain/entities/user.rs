//! User entity - a person being enrolled
//!
//! The entity holds data only. Persisting a user belongs to the stores,
//! and greeting one belongs to the notifier port; neither concern lives
//! here.

use crate::domain::entities::Record;
use crate::domain::value_objects::Email;

/// A person being enrolled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: Email,
}

impl User {
    /// Create a new user
    pub fn new(name: impl Into<String>, email: Email) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address
    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl From<&User> for Record {
    fn from(user: &User) -> Self {
        Record::new()
            .with_field("name", user.name())
            .with_field("email", user.email().as_str())
    }
}
