//! Diesel schema for activity lifecycle persistence.

diesel::table! {
    /// Activity records with embedded status history.
    activities (id) {
        /// Internal activity identifier.
        id -> Uuid,
        /// Owning company identifier.
        #[max_length = 255]
        company_id -> Varchar,
        /// Activity title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Current lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Current assignee identifier.
        #[max_length = 255]
        assigned_to -> Varchar,
        /// Creator identifier.
        #[max_length = 255]
        created_by -> Varchar,
        /// Planned or actual start time.
        start_time -> Nullable<Timestamptz>,
        /// Planned or actual end time.
        end_time -> Nullable<Timestamptz>,
        /// Append-only status history payload, oldest entry first.
        status_history -> Jsonb,
        /// Soft-delete flag; inactive rows are excluded from reads.
        is_active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
