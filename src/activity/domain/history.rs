//! Append-only status history for activity audit trails.

use super::ActivityStatus;
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of one status or assignment change.
///
/// Entries are appended in the order operations are applied to an activity
/// and are never reordered, mutated, or pruned. The assignee is captured on
/// every entry so reassignments are auditable even when the status did not
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// Status as of this entry.
    pub status: ActivityStatus,

    /// User who caused the change.
    pub changed_by: UserId,

    /// When the change was applied.
    pub changed_at: DateTime<Utc>,

    /// Assignee as of this entry.
    pub assigned_to: UserId,

    /// Start time snapshot at the moment of this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// End time snapshot at the moment of this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}
