//! `PostgreSQL` adapters for activity lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{ActivityPgPool, PostgresActivityRepository};
