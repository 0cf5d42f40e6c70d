//! Diesel row models for directory persistence.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Opaque user identifier.
    pub id: String,
    /// Owning company identifier.
    pub company_id: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Role held within the company.
    pub role: String,
    /// Soft-delete flag.
    pub is_active: bool,
}
