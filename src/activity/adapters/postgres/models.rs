//! Diesel row models for activity persistence.

use super::schema::activities;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for activity records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityRow {
    /// Internal activity identifier.
    pub id: uuid::Uuid,
    /// Owning company identifier.
    pub company_id: String,
    /// Activity title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Current lifecycle status.
    pub status: String,
    /// Current assignee identifier.
    pub assigned_to: String,
    /// Creator identifier.
    pub created_by: String,
    /// Planned or actual start time.
    pub start_time: Option<DateTime<Utc>>,
    /// Planned or actual end time.
    pub end_time: Option<DateTime<Utc>>,
    /// Status history JSON payload.
    pub status_history: Value,
    /// Soft-delete flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for activity records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activities)]
pub struct NewActivityRow {
    /// Internal activity identifier.
    pub id: uuid::Uuid,
    /// Owning company identifier.
    pub company_id: String,
    /// Activity title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Current lifecycle status.
    pub status: String,
    /// Current assignee identifier.
    pub assigned_to: String,
    /// Creator identifier.
    pub created_by: String,
    /// Planned or actual start time.
    pub start_time: Option<DateTime<Utc>>,
    /// Planned or actual end time.
    pub end_time: Option<DateTime<Utc>>,
    /// Status history JSON payload.
    pub status_history: Value,
    /// Soft-delete flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
