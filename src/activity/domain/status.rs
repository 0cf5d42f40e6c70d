//! Activity status state machine.

use super::ParseActivityStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity lifecycle status.
///
/// There is no dead-end state: `completed` and `cancelled` both reopen back
/// to `pending`, so every status keeps at least one outgoing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Work has not started; the status every activity is created with.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work finished; locked against reassignment.
    Completed,
    /// Work was called off.
    Cancelled,
}

impl ActivityStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` when the transition table allows moving to `next`.
    ///
    /// Allowed moves: `pending → in_progress | cancelled`;
    /// `in_progress → completed | cancelled | pending`;
    /// `completed → pending`; `cancelled → pending`. Self-transitions are
    /// never allowed.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress | Self::Cancelled)
                | (
                    Self::InProgress,
                    Self::Completed | Self::Cancelled | Self::Pending
                )
                | (Self::Completed | Self::Cancelled, Self::Pending)
        )
    }

    /// Returns `true` when an entry with this status must carry a start time.
    #[must_use]
    pub const fn requires_start_time(self) -> bool {
        matches!(self, Self::InProgress | Self::Completed)
    }

    /// Returns `true` when an entry with this status must carry an end time.
    #[must_use]
    pub const fn requires_end_time(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for ActivityStatus {
    type Error = ParseActivityStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseActivityStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
