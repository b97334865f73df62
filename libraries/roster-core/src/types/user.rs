/// User domain types
use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database-assigned user identifier
pub type UserId = i64;

/// Message returned when either required field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "name and email are required";

/// A stored user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned in increasing order by the database
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address (neither unique nor format-checked)
    pub email: String,

    /// Insertion timestamp set by the database
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a user
///
/// Both fields are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Trim and validate a name and email
    ///
    /// Fails with [`RosterError::InvalidInput`] if either value is empty
    /// after trimming.
    pub fn new(name: impl AsRef<str>, email: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        let email = email.as_ref().trim();

        if name.is_empty() || email.is_empty() {
            return Err(RosterError::invalid_input(REQUIRED_FIELDS_MESSAGE));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Trimmed display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed contact address
    pub fn email(&self) -> &str {
        &self.email
    }
}
