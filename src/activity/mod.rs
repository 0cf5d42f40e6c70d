//! Activity lifecycle management for Workpulse.
//!
//! This module implements the activity lifecycle engine: creating activities
//! inside a tenant, moving them through a fixed status state machine,
//! reassigning them with an append-only audit trail, and resolving every
//! assignee reference through the directory so cross-tenant references never
//! persist. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
