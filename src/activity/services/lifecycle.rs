//! Service layer for activity creation, status transitions, and
//! reassignment.
//!
//! The service is the contract the request-handling layer consumes: it
//! validates raw identifiers once at the boundary, resolves assignees
//! through the directory so cross-tenant references never persist, and
//! delegates every state rule to the domain aggregate.

use crate::activity::{
    domain::{
        Activity, ActivityDomainError, ActivityId, ActivityStatus, NewActivityParams, StatusChange,
    },
    ports::{ActivityRepository, ActivityRepositoryError},
};
use crate::directory::{
    domain::{CompanyId, DirectoryDomainError, UserId},
    ports::{DirectoryError, UserDirectory},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateActivityRequest {
    title: String,
    description: Option<String>,
    assigned_to: Option<String>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    created_by: String,
    company_id: String,
}

impl CreateActivityRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        created_by: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            assigned_to: None,
            start_time: None,
            end_time: None,
            created_by: created_by.into(),
            company_id: company_id.into(),
        }
    }

    /// Sets the activity description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit assignee; when absent the creator is assigned.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Sets the planned start time.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the planned end time.
    #[must_use]
    pub const fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Request payload for a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    activity_id: String,
    status: ActivityStatus,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    updated_by: String,
}

impl UpdateStatusRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        activity_id: impl Into<String>,
        status: ActivityStatus,
        updated_by: impl Into<String>,
    ) -> Self {
        Self {
            activity_id: activity_id.into(),
            status,
            start_time: None,
            end_time: None,
            updated_by: updated_by.into(),
        }
    }

    /// Sets a new start time; absent values keep the activity's current one.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets a new end time; absent values keep the activity's current one.
    #[must_use]
    pub const fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Request payload for reassigning an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignRequest {
    activity_id: String,
    assigned_to: String,
    updated_by: String,
    company_id: String,
}

impl ReassignRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        activity_id: impl Into<String>,
        assigned_to: impl Into<String>,
        updated_by: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        Self {
            activity_id: activity_id.into(),
            assigned_to: assigned_to.into(),
            updated_by: updated_by.into(),
            company_id: company_id.into(),
        }
    }
}

/// Service-level errors for activity lifecycle operations.
#[derive(Debug, Error)]
pub enum ActivityLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ActivityDomainError),
    /// An identifier argument failed validation.
    #[error(transparent)]
    Identity(#[from] DirectoryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ActivityRepositoryError),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for activity lifecycle service operations.
pub type ActivityLifecycleResult<T> = Result<T, ActivityLifecycleError>;

/// Activity lifecycle orchestration service.
///
/// Stateless: all shared state lives behind the repository and directory
/// ports, so any number of service instances can run concurrently.
#[derive(Clone)]
pub struct ActivityLifecycleService<R, D, C>
where
    R: ActivityRepository,
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<R, D, C> ActivityLifecycleService<R, D, C>
where
    R: ActivityRepository,
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new activity lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    /// Creates a pending activity inside the caller's company.
    ///
    /// Without an explicit assignee the creator is assigned. The assignee
    /// must resolve to an active user of the company.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLifecycleError`] when input validation fails, the
    /// assignee does not resolve within the company, or the repository
    /// rejects persistence.
    pub async fn create_activity(
        &self,
        request: CreateActivityRequest,
    ) -> ActivityLifecycleResult<Activity> {
        let created_by = UserId::new(request.created_by)?;
        let company_id = CompanyId::new(request.company_id)?;

        let mut params = NewActivityParams::new(request.title)?;
        if let Some(description) = request.description {
            params = params.with_description(description);
        }
        if let Some(assignee) = request.assigned_to {
            params = params.with_assignee(UserId::new(assignee)?);
        }
        if let Some(start_time) = request.start_time {
            params = params.with_start_time(start_time);
        }
        if let Some(end_time) = request.end_time {
            params = params.with_end_time(end_time);
        }

        let assignee = params
            .assigned_to()
            .cloned()
            .unwrap_or_else(|| created_by.clone());
        self.resolve_assignee(&assignee, &company_id).await?;

        let activity = Activity::create(params, created_by, company_id, &*self.clock)?;
        self.repository.store(&activity).await?;
        info!(activity_id = %activity.id(), "activity created");
        Ok(activity)
    }

    /// Applies a status transition to an existing activity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::NotFound`] (wrapped) when the
    /// activity does not exist or is soft-deleted, and a domain error when
    /// the transition table or the temporal invariants reject the change.
    pub async fn update_status(
        &self,
        request: UpdateStatusRequest,
    ) -> ActivityLifecycleResult<Activity> {
        let activity_id = ActivityId::parse(&request.activity_id)?;
        let updated_by = UserId::new(request.updated_by)?;

        let mut activity = self
            .repository
            .find_by_id(activity_id)
            .await?
            .ok_or(ActivityRepositoryError::NotFound(activity_id))?;

        let mut change = StatusChange::new(request.status);
        if let Some(start_time) = request.start_time {
            change = change.with_start_time(start_time);
        }
        if let Some(end_time) = request.end_time {
            change = change.with_end_time(end_time);
        }

        activity.transition_to(change, updated_by, &*self.clock)?;
        self.repository.update(&activity).await?;
        info!(
            activity_id = %activity.id(),
            status = %activity.status(),
            "activity status updated"
        );
        Ok(activity)
    }

    /// Moves an activity to a new assignee within the caller's company.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::NotFound`] (wrapped) when the
    /// activity does not exist or is soft-deleted,
    /// [`ActivityDomainError::CompletedActivityReassignment`] when it is
    /// completed, and [`ActivityDomainError::UnresolvedAssignee`] when the
    /// new assignee does not resolve within the company.
    pub async fn reassign(&self, request: ReassignRequest) -> ActivityLifecycleResult<Activity> {
        let activity_id = ActivityId::parse(&request.activity_id)?;
        let updated_by = UserId::new(request.updated_by)?;
        let company_id = CompanyId::new(request.company_id)?;
        let assignee = UserId::new(request.assigned_to)?;

        let mut activity = self
            .repository
            .find_by_id(activity_id)
            .await?
            .ok_or(ActivityRepositoryError::NotFound(activity_id))?;

        activity.ensure_reassignable()?;
        self.resolve_assignee(&assignee, &company_id).await?;

        activity.reassign_to(assignee, updated_by, &*self.clock)?;
        self.repository.update(&activity).await?;
        info!(
            activity_id = %activity.id(),
            assigned_to = %activity.assigned_to(),
            "activity reassigned"
        );
        Ok(activity)
    }

    /// Soft-deletes an activity.
    ///
    /// The record stays in storage but disappears from every read path. No
    /// history entry is written.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::NotFound`] (wrapped) when the
    /// activity does not exist or is already soft-deleted.
    pub async fn deactivate_activity(&self, id: &str) -> ActivityLifecycleResult<Activity> {
        let activity_id = ActivityId::parse(id)?;

        let mut activity = self
            .repository
            .find_by_id(activity_id)
            .await?
            .ok_or(ActivityRepositoryError::NotFound(activity_id))?;

        activity.deactivate(&*self.clock);
        self.repository.update(&activity).await?;
        info!(activity_id = %activity.id(), "activity deactivated");
        Ok(activity)
    }

    /// Retrieves an active activity by identifier.
    ///
    /// Returns `Ok(None)` when the activity does not exist or is
    /// soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLifecycleError`] when the identifier is invalid or
    /// the lookup fails.
    pub async fn activity_by_id(&self, id: &str) -> ActivityLifecycleResult<Option<Activity>> {
        let activity_id = ActivityId::parse(id)?;
        Ok(self.repository.find_by_id(activity_id).await?)
    }

    /// Returns the user's pending activities, newest created first.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLifecycleError`] when the identifier is blank or
    /// the lookup fails.
    pub async fn pending_activities_for_user(
        &self,
        user_id: &str,
    ) -> ActivityLifecycleResult<Vec<Activity>> {
        let assignee = UserId::new(user_id)?;
        Ok(self.repository.find_pending_by_user(&assignee).await?)
    }

    /// Returns all activities assigned to the user, newest created first.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLifecycleError`] when the identifier is blank or
    /// the lookup fails.
    pub async fn activities_for_user(
        &self,
        user_id: &str,
    ) -> ActivityLifecycleResult<Vec<Activity>> {
        let assignee = UserId::new(user_id)?;
        Ok(self.repository.find_by_user(&assignee).await?)
    }

    /// Returns all of a company's activities, newest created first.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLifecycleError`] when the identifier is blank or
    /// the lookup fails.
    pub async fn activities_for_company(
        &self,
        company_id: &str,
    ) -> ActivityLifecycleResult<Vec<Activity>> {
        let company = CompanyId::new(company_id)?;
        Ok(self.repository.find_by_company(&company).await?)
    }

    /// Fails unless the candidate resolves to an active user of the company.
    async fn resolve_assignee(
        &self,
        user_id: &UserId,
        company_id: &CompanyId,
    ) -> ActivityLifecycleResult<()> {
        let record = self
            .directory
            .find_by_id_and_company(user_id, company_id)
            .await?;
        if record.is_none() {
            return Err(ActivityDomainError::UnresolvedAssignee {
                user_id: user_id.clone(),
                company_id: company_id.clone(),
            }
            .into());
        }
        Ok(())
    }
}
