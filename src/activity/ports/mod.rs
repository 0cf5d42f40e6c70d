//! Port contracts for activity lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by activity
//! services.

pub mod repository;

pub use repository::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult};
