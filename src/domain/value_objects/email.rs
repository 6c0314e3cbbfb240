//! Email value object - a validated contact address
//!
//! Validation is deliberately shallow: a non-empty local part and domain
//! separated by `@`. Anything stricter belongs to a mail system, not here.

use serde::{Deserialize, Serialize};

use crate::error::EnrollError;

/// A contact address accepted at parse time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an address, rejecting anything without both parts around `@`
    pub fn parse(raw: &str) -> Result<Self, EnrollError> {
        let raw = raw.trim();
        match raw.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(raw.to_string()))
            }
            _ => Err(EnrollError::InvalidEmail {
                input: raw.to_string(),
            }),
        }
    }

    /// The address as entered (trimmed)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
