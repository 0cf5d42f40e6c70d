//! Activity aggregate root and lifecycle mutation rules.

use super::{ActivityDomainError, ActivityId, ActivityStatus, StatusHistoryEntry};
use crate::directory::domain::{CompanyId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated input for creating a new activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivityParams {
    title: String,
    description: Option<String>,
    assigned_to: Option<UserId>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
}

impl NewActivityParams {
    /// Creates activity parameters with the required title.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::EmptyTitle`] if the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, ActivityDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(ActivityDomainError::EmptyTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: None,
            assigned_to: None,
            start_time: None,
            end_time: None,
        })
    }

    /// Sets the activity description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets an explicit assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assigned_to = Some(assignee);
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

    /// Returns the explicit assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&UserId> {
        self.assigned_to.as_ref()
    }
}

/// Requested status change with optional timing updates.
///
/// Times are merge semantics: a value supplied here overrides the
/// activity's current value, an absent value leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    status: ActivityStatus,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
}

impl StatusChange {
    /// Creates a status change request.
    #[must_use]
    pub const fn new(status: ActivityStatus) -> Self {
        Self {
            status,
            start_time: None,
            end_time: None,
        }
    }

    /// Sets a new start time.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets a new end time.
    #[must_use]
    pub const fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Returns the requested status.
    #[must_use]
    pub const fn status(&self) -> ActivityStatus {
        self.status
    }
}

/// Activity aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    company_id: CompanyId,
    title: String,
    description: Option<String>,
    status: ActivityStatus,
    assigned_to: UserId,
    created_by: UserId,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    status_history: Vec<StatusHistoryEntry>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted activity aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActivityData {
    /// Persisted activity identifier.
    pub id: ActivityId,
    /// Persisted owning company.
    pub company_id: CompanyId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: ActivityStatus,
    /// Persisted assignee.
    pub assigned_to: UserId,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted start time, if any.
    pub start_time: Option<DateTime<Utc>>,
    /// Persisted end time, if any.
    pub end_time: Option<DateTime<Utc>>,
    /// Persisted status history, oldest first.
    pub status_history: Vec<StatusHistoryEntry>,
    /// Persisted soft-delete flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Creates a new pending activity and seeds its status history.
    ///
    /// When the parameters carry no explicit assignee, the creator becomes
    /// the assignee. The seed history entry records the creator, the
    /// resolved assignee, and the initial timing.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::InvalidTimeRange`] when both times are
    /// supplied out of order.
    pub fn create(
        params: NewActivityParams,
        created_by: UserId,
        company_id: CompanyId,
        clock: &impl Clock,
    ) -> Result<Self, ActivityDomainError> {
        ensure_time_order(params.start_time, params.end_time)?;
        let assigned_to = params
            .assigned_to
            .unwrap_or_else(|| created_by.clone());
        let timestamp = clock.utc();

        let seed_entry = StatusHistoryEntry {
            status: ActivityStatus::Pending,
            changed_by: created_by.clone(),
            changed_at: timestamp,
            assigned_to: assigned_to.clone(),
            start_time: params.start_time,
            end_time: params.end_time,
        };

        Ok(Self {
            id: ActivityId::new(),
            company_id,
            title: params.title,
            description: params.description,
            status: ActivityStatus::Pending,
            assigned_to,
            created_by,
            start_time: params.start_time,
            end_time: params.end_time,
            status_history: vec![seed_entry],
            is_active: true,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs an activity from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedActivityData) -> Self {
        Self {
            id: data.id,
            company_id: data.company_id,
            title: data.title,
            description: data.description,
            status: data.status,
            assigned_to: data.assigned_to,
            created_by: data.created_by,
            start_time: data.start_time,
            end_time: data.end_time,
            status_history: data.status_history,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the activity identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the owning company identifier.
    #[must_use]
    pub const fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    /// Returns the activity title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the activity description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ActivityStatus {
        self.status
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> &UserId {
        &self.assigned_to
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the current start time, if any.
    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Returns the current end time, if any.
    #[must_use]
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Returns the status history, oldest entry first.
    #[must_use]
    pub fn status_history(&self) -> &[StatusHistoryEntry] {
        &self.status_history
    }

    /// Returns `true` while the activity has not been soft-deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a status transition and appends one history entry.
    ///
    /// Supplied times override current values; absent times are carried
    /// over. All validation happens before any field is touched, so a
    /// rejected transition leaves the aggregate byte-for-byte unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::InvalidStatusTransition`] when the
    /// transition table disallows the move,
    /// [`ActivityDomainError::InvalidTimeRange`] when the merged times are
    /// out of order, and [`ActivityDomainError::MissingStartTime`] /
    /// [`ActivityDomainError::MissingEndTime`] when the target status
    /// requires a time that is absent after merging.
    pub fn transition_to(
        &mut self,
        change: StatusChange,
        changed_by: UserId,
        clock: &impl Clock,
    ) -> Result<(), ActivityDomainError> {
        let next = change.status;
        if !self.status.can_transition_to(next) {
            return Err(ActivityDomainError::InvalidStatusTransition {
                activity_id: self.id,
                from: self.status,
                to: next,
            });
        }

        let start_time = change.start_time.or(self.start_time);
        let end_time = change.end_time.or(self.end_time);
        ensure_time_order(start_time, end_time)?;
        if next.requires_start_time() && start_time.is_none() {
            return Err(ActivityDomainError::MissingStartTime(next));
        }
        if next.requires_end_time() && end_time.is_none() {
            return Err(ActivityDomainError::MissingEndTime(next));
        }

        let timestamp = clock.utc();
        self.status = next;
        self.start_time = start_time;
        self.end_time = end_time;
        self.status_history.push(StatusHistoryEntry {
            status: next,
            changed_by,
            changed_at: timestamp,
            assigned_to: self.assigned_to.clone(),
            start_time,
            end_time,
        });
        self.updated_at = timestamp;
        Ok(())
    }

    /// Checks that the activity accepts a reassignment.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::CompletedActivityReassignment`] when
    /// the activity is completed.
    pub const fn ensure_reassignable(&self) -> Result<(), ActivityDomainError> {
        if matches!(self.status, ActivityStatus::Completed) {
            return Err(ActivityDomainError::CompletedActivityReassignment(self.id));
        }
        Ok(())
    }

    /// Moves the activity to a new assignee and appends one history entry.
    ///
    /// The status and times are unchanged; the entry snapshots them with the
    /// new assignee so the reassignment is auditable.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::CompletedActivityReassignment`] when
    /// the activity is completed.
    pub fn reassign_to(
        &mut self,
        assignee: UserId,
        changed_by: UserId,
        clock: &impl Clock,
    ) -> Result<(), ActivityDomainError> {
        self.ensure_reassignable()?;

        let timestamp = clock.utc();
        self.assigned_to = assignee.clone();
        self.status_history.push(StatusHistoryEntry {
            status: self.status,
            changed_by,
            changed_at: timestamp,
            assigned_to: assignee,
            start_time: self.start_time,
            end_time: self.end_time,
        });
        self.updated_at = timestamp;
        Ok(())
    }

    /// Soft-deletes the activity.
    ///
    /// The record stays in storage but disappears from every read path. No
    /// history entry is written.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.is_active = false;
        self.updated_at = clock.utc();
    }
}

/// Rejects time windows whose start does not strictly precede their end.
fn ensure_time_order(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), ActivityDomainError> {
    if let (Some(start_time), Some(end_time)) = (start, end) {
        if start_time >= end_time {
            return Err(ActivityDomainError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
    }
    Ok(())
}
