//! Error types for directory domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The user identifier is empty after trimming.
    #[error("user identifier must not be blank")]
    BlankUserId,

    /// The company identifier is empty after trimming.
    #[error("company identifier must not be blank")]
    BlankCompanyId,

    /// The user display name is empty after trimming.
    #[error("user display name must not be blank")]
    BlankDisplayName,
}

/// Error returned while parsing user roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);
