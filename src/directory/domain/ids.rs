//! Identifier types shared across tenant-scoped modules.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a user account.
///
/// User identifiers are minted by the authentication layer; the domain only
/// guarantees they are non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::BlankUserId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::BlankUserId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a tenant company.
///
/// Companies are the isolation boundary: a user reference only resolves
/// inside its own company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Creates a validated company identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::BlankCompanyId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::BlankCompanyId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompanyId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
