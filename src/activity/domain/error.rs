//! Error types for activity domain validation and parsing.

use super::{ActivityId, ActivityStatus};
use crate::directory::domain::{CompanyId, UserId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or mutating domain activity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDomainError {
    /// The activity title is empty after trimming.
    #[error("activity title must not be empty")]
    EmptyTitle,

    /// The activity identifier is blank or not a valid UUID.
    #[error("invalid activity identifier: '{0}'")]
    InvalidActivityId(String),

    /// The start time does not precede the end time.
    #[error("start time {start} must be strictly earlier than end time {end}")]
    InvalidTimeRange {
        /// Offending start time.
        start: DateTime<Utc>,
        /// Offending end time.
        end: DateTime<Utc>,
    },

    /// The target status requires a start time that is not set.
    #[error("status '{0}' requires a start time")]
    MissingStartTime(ActivityStatus),

    /// The target status requires an end time that is not set.
    #[error("status '{0}' requires an end time")]
    MissingEndTime(ActivityStatus),

    /// The requested status transition is not in the transition table.
    #[error("activity {activity_id} cannot transition from '{from}' to '{to}'")]
    InvalidStatusTransition {
        /// Activity being transitioned.
        activity_id: ActivityId,
        /// Current status.
        from: ActivityStatus,
        /// Requested status.
        to: ActivityStatus,
    },

    /// Completed activities cannot change assignee.
    #[error("activity {0} is completed and cannot be reassigned")]
    CompletedActivityReassignment(ActivityId),

    /// The assignee does not resolve within the activity's company.
    #[error("assigned user {user_id} does not exist or belongs to a different company than {company_id}")]
    UnresolvedAssignee {
        /// Candidate assignee.
        user_id: UserId,
        /// Tenant the assignee must belong to.
        company_id: CompanyId,
    },
}

/// Error returned while parsing activity statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity status: {0}")]
pub struct ParseActivityStatusError(pub String);
