//! User read model resolved through the directory.

use super::{CompanyId, DirectoryDomainError, ParseUserRoleError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user holds within its company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative access within the company.
    Admin,
    /// Manages areas and the activities of other users.
    Supervisor,
    /// Works on assigned activities.
    Employee,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Supervisor => "supervisor",
            Self::Employee => "employee",
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "supervisor" => Ok(Self::Supervisor),
            "employee" => Ok(Self::Employee),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User record as resolved from the directory.
///
/// A record is a read model: the directory owns account lifecycle, and the
/// rest of the system only asks whether a user resolves within a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    company_id: CompanyId,
    display_name: String,
    role: UserRole,
    is_active: bool,
}

impl UserRecord {
    /// Creates an active user record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::BlankDisplayName`] if the display
    /// name is empty after trimming.
    pub fn new(
        id: UserId,
        company_id: CompanyId,
        display_name: impl Into<String>,
        role: UserRole,
    ) -> Result<Self, DirectoryDomainError> {
        let raw = display_name.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::BlankDisplayName);
        }

        Ok(Self {
            id,
            company_id,
            display_name: normalized.to_owned(),
            role,
            is_active: true,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the owning company identifier.
    #[must_use]
    pub const fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the user role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns `true` while the account has not been deactivated.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Marks the account as deactivated.
    ///
    /// Deactivated users stay in storage but never resolve as assignees.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
