//! Domain model for tenant and user identity.
//!
//! Identifiers arrive from the authentication layer as opaque strings; the
//! domain validates them once at the boundary and passes typed values
//! everywhere else.

mod error;
mod ids;
mod user;

pub use error::{DirectoryDomainError, ParseUserRoleError};
pub use ids::{CompanyId, UserId};
pub use user::{UserRecord, UserRole};
