//! Diesel schema for user directory persistence.

diesel::table! {
    /// User accounts scoped to a company.
    users (id) {
        /// Opaque user identifier from the authentication layer.
        #[max_length = 255]
        id -> Varchar,
        /// Owning company identifier.
        #[max_length = 255]
        company_id -> Varchar,
        /// Human-readable display name.
        #[max_length = 255]
        display_name -> Varchar,
        /// Role held within the company.
        #[max_length = 50]
        role -> Varchar,
        /// Soft-delete flag; inactive users never resolve.
        is_active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
