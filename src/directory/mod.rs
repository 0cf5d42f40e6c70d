//! Tenant and user identity for Workpulse.
//!
//! The directory answers one question for the rest of the system: does a
//! given user exist, is it active, and does it belong to a given company?
//! Every cross-entity reference in the activity module must resolve through
//! this boundary, which is what keeps tenants isolated from each other. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
