//! Directory port for tenant-scoped user resolution.

use crate::directory::domain::{CompanyId, UserId, UserRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Tenant-scoped user lookup contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves an active user within the given company.
    ///
    /// Returns `None` when no active user with that identifier belongs to
    /// the company, including when the identifier exists under a different
    /// company.
    async fn find_by_id_and_company(
        &self,
        user_id: &UserId,
        company_id: &CompanyId,
    ) -> DirectoryResult<Option<UserRecord>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Persistence-layer failure.
    #[error("directory lookup failed: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
