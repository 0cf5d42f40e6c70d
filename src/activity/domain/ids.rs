//! Identifier types for the activity domain.

use super::ActivityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Creates a new random activity identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an activity identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses an activity identifier from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::InvalidActivityId`] when the value is
    /// blank or not a UUID.
    pub fn parse(value: &str) -> Result<Self, ActivityDomainError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ActivityDomainError::InvalidActivityId(value.to_owned()));
        }
        Uuid::parse_str(normalized)
            .map(Self)
            .map_err(|_| ActivityDomainError::InvalidActivityId(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ActivityId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
