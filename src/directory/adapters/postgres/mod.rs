//! `PostgreSQL` adapter for directory lookups.

mod models;
mod repository;
mod schema;

pub use repository::{DirectoryPgPool, PostgresUserDirectory};
