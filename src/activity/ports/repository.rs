//! Repository port for activity persistence and lookup.

use crate::activity::domain::{Activity, ActivityId};
use crate::directory::domain::{CompanyId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity repository operations.
pub type ActivityRepositoryResult<T> = Result<T, ActivityRepositoryError>;

/// Activity persistence contract.
///
/// Mutating calls persist the whole aggregate in one atomic write, so the
/// history gains exactly one entry per successful mutation and concurrent
/// writers against the same activity cannot interleave partial states. All
/// `find_*` operations return only active (non-soft-deleted) records, and
/// multi-result queries order newest created first.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Stores a new activity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::DuplicateActivity`] when the
    /// activity ID already exists.
    async fn store(&self, activity: &Activity) -> ActivityRepositoryResult<()>;

    /// Persists changes to an existing activity (status, assignee, timing,
    /// appended history, soft-delete flag, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::NotFound`] when the activity does
    /// not exist.
    async fn update(&self, activity: &Activity) -> ActivityRepositoryResult<()>;

    /// Finds an active activity by identifier.
    ///
    /// Returns `None` when the activity does not exist or is soft-deleted.
    async fn find_by_id(&self, id: ActivityId) -> ActivityRepositoryResult<Option<Activity>>;

    /// Returns the user's pending activities, newest created first.
    async fn find_pending_by_user(
        &self,
        user_id: &UserId,
    ) -> ActivityRepositoryResult<Vec<Activity>>;

    /// Returns all activities assigned to the user, newest created first.
    async fn find_by_user(&self, user_id: &UserId) -> ActivityRepositoryResult<Vec<Activity>>;

    /// Returns all of a company's activities, newest created first.
    async fn find_by_company(
        &self,
        company_id: &CompanyId,
    ) -> ActivityRepositoryResult<Vec<Activity>>;
}

/// Errors returned by activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRepositoryError {
    /// An activity with the same identifier already exists.
    #[error("duplicate activity identifier: {0}")]
    DuplicateActivity(ActivityId),

    /// The activity was not found or is soft-deleted.
    #[error("activity not found: {0}")]
    NotFound(ActivityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
